//! Argument handling and text rendering for the `linear` tool.

use kernel_page_indices::{DecodedIndices, ParseAddressError, VirtualAddress, decode_both};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

/// Printed instead of any result when the address argument is missing or
/// malformed.
pub const USAGE: &str = "\
Linear address to page table indices calculator

\tUsage:
\t\tlinear <hex address>

\tExample:
\t\tlinear 0xffffffff80200000

";

/// Separates the 4 KiB block from the 2 MiB block.
const BLOCK_SEPARATOR: &str = "---";

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("missing address argument")]
    Missing,
    #[error("address argument is not valid UTF-8: {0:?}")]
    NotUnicode(OsString),
    #[error("invalid address {input:?}: {source}")]
    Invalid {
        input: String,
        #[source]
        source: ParseAddressError,
    },
}

/// What [`run`] ended up printing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Decoded,
    Usage,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Decoded => ExitCode::SUCCESS,
            Self::Usage => ExitCode::from(2),
        }
    }
}

/// Extract the address from the positional arguments (program name already
/// skipped). Arguments after the first are ignored.
pub fn parse_args<I>(args: I) -> Result<VirtualAddress, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let raw = args.next().ok_or(ArgsError::Missing)?;
    let input = raw.into_string().map_err(ArgsError::NotUnicode)?;

    let extra = args.count();
    if extra > 0 {
        log::warn!("ignoring {extra} extra argument(s)");
    }

    input
        .parse()
        .map_err(|source| ArgsError::Invalid { input, source })
}

/// Entry point: decode the address named by `args` and print both page-size
/// interpretations to `out`, or print [`USAGE`] if there is no usable address.
pub fn run<I, W>(args: I, out: &mut W) -> io::Result<Outcome>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let va = match parse_args(args) {
        Ok(va) => va,
        Err(e) => {
            log::debug!("falling back to usage: {e}");
            out.write_all(USAGE.as_bytes())?;
            return Ok(Outcome::Usage);
        }
    };

    log::info!("decoding {va}");
    let [small, large] = decode_both(va);
    write_block(out, &small)?;
    writeln!(out, "{BLOCK_SEPARATOR}")?;
    write_block(out, &large)?;
    Ok(Outcome::Decoded)
}

fn write_block<W: Write>(out: &mut W, d: &DecodedIndices) -> io::Result<()> {
    writeln!(out, "{} pages", d.mode())?;
    writeln!(out, "PML4 index:\t{}", d.pml4())?;
    writeln!(out, "PDPT index:\t{}", d.pdpt())?;
    writeln!(out, "PD index:\t{}", d.pd())?;
    writeln!(out, "Page offset:\t{}", d.page_offset())
}
