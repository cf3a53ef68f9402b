//! Listing emission: sort, label, print.

use crate::format::format_operands;
use crate::image::Image;
use crate::opcode::EncodingClass;
use crate::walker::FlowGraph;

/// Assigns `.label<k>` names, in ascending address order, to every node
/// that is the destination of an intra-procedural branch.
pub fn assign_labels(graph: &mut FlowGraph) {
    let order = graph.sorted_indices();
    let mut label = 0;
    for i in order {
        let node = &mut graph.nodes_mut()[i];
        if !node.from.is_empty() {
            node.label = Some(format!(".label{}", label));
            label += 1;
        }
    }
}

/// Renders the final listing, one line per node in ascending address
/// order, with a label line above each branch destination. Unreachable
/// gaps are not printed.
pub fn render_listing(graph: &mut FlowGraph, image: &Image) -> String {
    assign_labels(graph);

    let mut out = String::new();
    for i in graph.sorted_indices() {
        let node = &graph.nodes()[i];
        if let Some(label) = &node.label {
            out.push_str(&format!("        {}:\n", label));
        }
        if node.width == 4 {
            out.push_str(&format!("{:08X}: {:08X} ", node.addr, node.raw));
        } else {
            out.push_str(&format!("{:08X}: {:04X}     ", node.addr, node.raw));
        }
        out.push_str(&format!("{:<6} ", node.opcode.mnemonic()));
        let operands = match node.class {
            // branches print their destination's label; the numeric
            // fallback is only reachable when the target fell off the
            // end of the image
            EncodingClass::Branch | EncodingClass::Goto => match node.to {
                Some(to) => graph.nodes()[to].label.clone().unwrap_or_default(),
                None => format_operands(node.opcode, node.class, node.raw, node.addr, image),
            },
            // calls print the target the walker recorded; a truncated
            // pair's raw no longer matches the spliced layout the
            // formatter assumes
            EncodingClass::Call => match node.dest {
                Some(dest) => format!("{:08X}", dest),
                None => format_operands(node.opcode, node.class, node.raw, node.addr, image),
            },
            _ => format_operands(node.opcode, node.class, node.raw, node.addr, image),
        };
        out.push_str(&operands);
        out.push('\n');
    }
    out
}
