//! Worklist reachability walk over one function body.
//!
//! Linear fall-through is followed immediately; conditional and
//! unconditional branch targets are queued and drained once the current
//! path terminates. Long branches (`bl`/`blx`) leave the function and
//! are recorded but never queued. Nodes live in an arena indexed by
//! position, with an address map for O(1) dedup; `to`/`from` links are
//! arena indices, which keeps the cyclic flow graph free of ownership
//! cycles.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::bits::extract;
use crate::decoder::{branch_target, call_target, decode, goto_target, is_return};
use crate::image::Image;
use crate::opcode::{EncodingClass, Opcode};

/// One decoded instruction.
#[derive(Debug, Clone)]
pub struct Node {
    /// Address the instruction was fetched at; always 2-byte aligned.
    pub addr: u32,
    /// 2 bytes, or 4 for a spliced long-branch pair.
    pub width: u32,
    /// Combined encoding; first half-word in the high 16 bits when `width == 4`.
    pub raw: u32,
    pub opcode: Opcode,
    pub class: EncodingClass,
    /// Static branch target, recorded for `Branch`, `Goto` and `Call`.
    pub dest: Option<u32>,
    /// Arena index of the node at `dest`, for intra-procedural branches.
    pub to: Option<usize>,
    /// Arena indices of the nodes whose `to` points here.
    pub from: Vec<usize>,
    /// Synthetic label, assigned by the printer when `from` is non-empty.
    pub label: Option<String>,
}

impl Node {
    fn new(addr: u32) -> Self {
        Node {
            addr,
            width: 2,
            raw: 0,
            opcode: Opcode::default(),
            class: EncodingClass::default(),
            dest: None,
            to: None,
            from: Vec::new(),
            label: None,
        }
    }
}

/// The set of nodes reachable from one entry point.
#[derive(Debug, Default)]
pub struct FlowGraph {
    nodes: Vec<Node>,
    by_addr: HashMap<u32, usize>,
}

impl FlowGraph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn node_at(&self, addr: u32) -> Option<&Node> {
        self.by_addr.get(&addr).map(|&i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena indices in ascending address order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.nodes.len()).collect();
        order.sort_by_key(|&i| self.nodes[i].addr);
        order
    }
}

/// Walks the image as code from `entry` (low bit cleared first — Thumb
/// entry addresses sometimes carry the mode marker) and returns every
/// instruction reachable without leaving the function.
///
/// Running off the image ends the walk; everything decoded up to that
/// point is kept.
pub fn walk(image: &Image, entry: u32) -> FlowGraph {
    let entry = entry & !1;
    let mut nodes: Vec<Node> = Vec::new();
    let mut by_addr: HashMap<u32, usize> = HashMap::new();
    let mut deferred: VecDeque<(usize, u32)> = VecDeque::new();
    let mut cursor = Some(entry);

    loop {
        let idx = match cursor {
            None => {
                let Some((src, dest)) = deferred.pop_front() else {
                    break;
                };
                if let Some(&existing) = by_addr.get(&dest) {
                    nodes[existing].from.push(src);
                    nodes[src].to = Some(existing);
                    continue;
                }
                let idx = nodes.len();
                nodes.push(Node::new(dest));
                nodes[idx].from.push(src);
                nodes[src].to = Some(idx);
                idx
            }
            Some(addr) => {
                if by_addr.contains_key(&addr) {
                    // fall-through merged into an already-visited path
                    cursor = None;
                    continue;
                }
                let idx = nodes.len();
                nodes.push(Node::new(addr));
                idx
            }
        };
        by_addr.insert(nodes[idx].addr, idx);

        let mut addr = nodes[idx].addr;
        let Some(half) = image.read_halfword(addr) else {
            // ran off the image before this node was decoded
            discard_undecoded(&mut nodes, &mut by_addr, idx);
            break;
        };
        addr = addr.wrapping_add(2);
        let mut raw = u32::from(half);
        let (opcode, class) = decode(raw);
        let mut truncated = false;
        if extract(raw, 11, 15) == 0b11110 {
            // first half of a bl pair; splice the second half in
            match image.read_halfword(addr) {
                Some(second) => {
                    raw = u32::from(second) | raw << 16;
                    addr = addr.wrapping_add(2);
                }
                None => truncated = true,
            }
        }

        let node = &mut nodes[idx];
        node.raw = raw;
        node.width = addr.wrapping_sub(node.addr);
        node.opcode = opcode;
        node.class = class;

        match class {
            EncodingClass::Branch => {
                let dest = branch_target(raw, node.addr);
                node.dest = Some(dest);
                deferred.push_back((idx, dest));
            }
            EncodingClass::Goto => {
                let dest = goto_target(raw, node.addr);
                node.dest = Some(dest);
                deferred.push_back((idx, dest));
            }
            EncodingClass::Call => {
                // a truncated pair still holds the first half in its low
                // bits; move it into the spliced position so the offset
                // bits line up with the target formula
                let value = if truncated { raw << 16 } else { raw };
                node.dest = Some(call_target(value, node.addr));
            }
            _ => {}
        }

        if truncated {
            break;
        }

        if is_return(opcode, class, raw) || class == EncodingClass::Goto {
            cursor = None;
        } else {
            cursor = Some(addr);
        }
    }

    debug!("walked {} instructions from {:08X}", nodes.len(), entry);
    FlowGraph { nodes, by_addr }
}

fn discard_undecoded(nodes: &mut Vec<Node>, by_addr: &mut HashMap<u32, usize>, idx: usize) {
    debug_assert_eq!(idx + 1, nodes.len());
    if let Some(node) = nodes.pop() {
        by_addr.remove(&node.addr);
        for src in node.from {
            nodes[src].to = None;
        }
    }
}
