//! Library entry for openmsg-cli used by integration tests and embedding.

pub mod commands;
pub mod report;
pub mod sample;

// Re-export commands for convenience
pub use commands::*;

use openmsg_core::Endianness;

/// Byte order selected on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum EndianArg {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

impl From<EndianArg> for Endianness {
    fn from(arg: EndianArg) -> Self {
        match arg {
            EndianArg::Big => Endianness::Big,
            EndianArg::Little => Endianness::Little,
        }
    }
}

/// Scalar width selected on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum WidthArg {
    /// 8 bits
    #[value(name = "8")]
    W8,
    /// 16 bits
    #[value(name = "16")]
    W16,
    /// 32 bits
    #[value(name = "32")]
    W32,
    /// 64 bits
    #[value(name = "64")]
    W64,
}

impl WidthArg {
    /// Width in bytes
    pub fn bytes(self) -> usize {
        match self {
            WidthArg::W8 => 1,
            WidthArg::W16 => 2,
            WidthArg::W32 => 4,
            WidthArg::W64 => 8,
        }
    }
}
