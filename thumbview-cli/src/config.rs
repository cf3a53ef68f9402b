use anyhow::{bail, Result};
use clap::Parser;

/// Disassembles the Thumb function at the given address of a raw
/// binary image.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct RawConfig {
    /// Raw binary image (optionally zipped)
    filename: String,

    /// Entry address of the function (0x hex, leading-0 octal, or decimal)
    address: String,

    /// Address the start of the file is mapped at
    #[arg(long, default_value = "0x08000000")]
    base: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

pub struct CleanConfig {
    // path to the image file
    pub filename: String,
    // entry address, mode bit cleared
    pub address: u32,
    // load address of the image
    pub base: u32,
    // log filter selection
    pub verbose: bool,
}

impl RawConfig {
    pub fn clean(self) -> Result<CleanConfig> {
        let base = match parse_c_int(&self.base) {
            Ok(base) => base,
            Err(_) => bail!("invalid base: {}", self.base),
        };
        let address = match parse_c_int(&self.address) {
            Ok(address) => address,
            Err(_) => bail!("invalid address: {}", self.address),
        };
        if address < base {
            bail!("invalid address: {:#x}", address);
        }

        Ok(CleanConfig {
            filename: self.filename,
            address: address & !1,
            base,
            verbose: self.verbose,
        })
    }
}

/// Parses an unsigned integer with C-style prefixes: `0x`/`0X` hex, a
/// leading `0` octal, decimal otherwise.
fn parse_c_int(s: &str) -> Result<u32, std::num::ParseIntError> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        u32::from_str_radix(&s[1..], 8)
    } else {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_c_int_prefixes() {
        assert_eq!(parse_c_int("0x08000000"), Ok(0x0800_0000));
        assert_eq!(parse_c_int("0X10"), Ok(0x10));
        assert_eq!(parse_c_int("0755"), Ok(0o755));
        assert_eq!(parse_c_int("42"), Ok(42));
        assert_eq!(parse_c_int("0"), Ok(0));
        assert!(parse_c_int("0xZZ").is_err());
        assert!(parse_c_int("").is_err());
    }

    #[test]
    fn clean_clears_mode_bit() {
        let raw = RawConfig {
            filename: "rom.gba".into(),
            address: "0x08000101".into(),
            base: "0x08000000".into(),
            verbose: false,
        };
        let config = raw.clean().unwrap();
        assert_eq!(config.address, 0x0800_0100);
    }

    #[test]
    fn clean_rejects_address_below_base() {
        let raw = RawConfig {
            filename: "rom.gba".into(),
            address: "0x100".into(),
            base: "0x08000000".into(),
            verbose: false,
        };
        assert!(raw.clean().is_err());
    }
}
