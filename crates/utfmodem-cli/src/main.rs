//! Thin demonstration harness for the `utfmodem` transcoder.
//!
//! Prints the transcoded bytes for manual inspection. Everything here is
//! presentation glue; the transcoder itself stays a pure function with no
//! knowledge of this binary.

use std::io::Read;

use anyhow::{Context, Result, bail};
use bstr::ByteSlice;
use clap::Parser;
use utfmodem::{transcode, transcode_units};

#[derive(Parser, Debug)]
#[command(name = "utfmodem", version, about = "Transcode UTF-16 to UTF-8 and print the bytes")]
struct Cli {
    /// Text to transcode; read from stdin when omitted.
    text: Option<String>,

    /// Raw UTF-16 code units as hex (e.g. --unit D83D --unit DE00).
    ///
    /// This path accepts ill-formed sequences, so it is the way to watch the
    /// transcoder reject lone or mismatched surrogates.
    #[arg(long = "unit", value_name = "HEX", conflicts_with = "text")]
    units: Vec<String>,

    /// Compare the output against the platform's own UTF-8 bytes.
    #[arg(long, conflicts_with = "units")]
    verify: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (bytes, reference) = if cli.units.is_empty() {
        let text = match cli.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading stdin")?;
                buf
            }
        };
        let bytes = transcode(&text).context("transcoding text")?;
        let reference = cli.verify.then(|| text.into_bytes());
        (bytes, reference)
    } else {
        let units = cli
            .units
            .iter()
            .map(|raw| {
                let digits = raw.trim_start_matches("0x").trim_start_matches("0X");
                u16::from_str_radix(digits, 16).with_context(|| format!("invalid code unit {raw:?}"))
            })
            .collect::<Result<Vec<u16>>>()?;
        let bytes = transcode_units(&units).context("transcoding code units")?;
        (bytes, None)
    };

    let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
    println!("bytes: [{}]", hex.join(" "));
    println!("text:  {}", bytes.as_bstr());

    if let Some(reference) = reference {
        if bytes != reference {
            bail!("output differs from the platform UTF-8 encoding");
        }
        println!("verify: matches the platform UTF-8 encoding");
    }

    Ok(())
}
