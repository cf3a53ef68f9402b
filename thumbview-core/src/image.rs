//! Raw binary image mapped at a fixed base address.
//!
//! The image is the only byte source in the pipeline: the walker reads
//! half-words from it and the literal-pool formatter reads words. Reads
//! are positional and never touch shared state. ZIP input is detected
//! by magic and the first member with an image extension is unpacked.

use std::fs;
use std::io;
use std::io::{Cursor, Read};

use log::info;
use zip::ZipArchive;

/// Largest ROM a GBA cartridge maps.
pub const MAX_IMAGE_SIZE: usize = 32 << 20;

const IMAGE_EXTENSIONS: [&str; 2] = [".gba", ".bin"];

#[derive(Debug)]
pub struct Image {
    base: u32,
    data: Vec<u8>,
}

fn unpack_rom(data: &[u8]) -> Result<Vec<u8>, io::Error> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let member = archive
        .file_names()
        .find(|name| {
            let lower = name.to_lowercase();
            IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
        })
        .map(String::from)
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "zip archive holds no image member")
        })?;
    info!("unpacking {} from zip", member);

    let mut file = archive.by_name(&member)?;
    let mut rom = Vec::with_capacity(file.size() as usize);
    file.read_to_end(&mut rom)?;
    Ok(rom)
}

impl Image {
    pub fn load_from_bytes(data: &[u8], base: u32) -> Result<Self, io::Error> {
        let data = if data.starts_with(b"PK\x03\x04") {
            unpack_rom(data)?
        } else {
            data.to_vec()
        };

        if data.len() > MAX_IMAGE_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "image larger than 32 MiB",
            ));
        }

        Ok(Image { base, data })
    }

    pub fn load_from_path(path: &str, base: u32) -> Result<Self, io::Error> {
        let data = fs::read(path)?;
        Self::load_from_bytes(&data, base)
    }

    /// Address the start of the image is mapped at.
    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset(&self, addr: u32, size: usize) -> Option<usize> {
        let offset = addr.checked_sub(self.base)? as usize;
        if offset.checked_add(size)? <= self.data.len() {
            Some(offset)
        } else {
            None
        }
    }

    /// Little-endian half-word at `addr`, or `None` past either end.
    pub fn read_halfword(&self, addr: u32) -> Option<u16> {
        let offset = self.offset(addr, 2)?;
        let b0 = self.data[offset] as u16;
        let b1 = self.data[offset + 1] as u16;
        Some((b1 << 8) | b0)
    }

    /// Little-endian word at `addr`, or `None` past either end.
    pub fn read_word(&self, addr: u32) -> Option<u32> {
        let offset = self.offset(addr, 4)?;
        let b0 = self.data[offset] as u32;
        let b1 = self.data[offset + 1] as u32;
        let b2 = self.data[offset + 2] as u32;
        let b3 = self.data[offset + 3] as u32;
        Some((b3 << 24) | (b2 << 16) | (b1 << 8) | b0)
    }
}
