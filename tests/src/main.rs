// Copyright (c) 2022-2023 The MobileCoin Foundation

use clap::Parser;
use encdec::Encode;
use log::{debug, info, LevelFilter};
use strum::{Display, EnumString, EnumVariantNames};

use ledger_nem_apdu::prelude::{ApduStatic, Bip32Path, SignChunks, SignTxReq};
use ledger_nem_tests::vectors::{self, Vector};

/// Test vector CLI arguments
#[derive(Clone, Debug, Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: Command,

    /// Log level
    #[clap(long, default_value = "info", env)]
    pub log_level: LevelFilter,
}

/// Vector commands
#[derive(Clone, PartialEq, Debug, Parser, Display, EnumString, EnumVariantNames)]
pub enum Command {
    /// List bundled vectors
    List,
    /// Encode a vector transaction to hex
    Encode {
        #[clap(flatten)]
        source: Source,
    },
    /// Encode a vector to the sequence of signing APDUs
    Apdus {
        #[clap(flatten)]
        source: Source,
    },
    /// Print the expected review fields for a vector
    Fields {
        #[clap(flatten)]
        source: Source,
    },
}

/// Vector source, a bundled vector name or a JSON file
#[derive(Clone, PartialEq, Debug, Default, Parser)]
pub struct Source {
    /// Bundled vector name
    #[clap(conflicts_with = "input")]
    pub name: Option<String>,

    /// Vector JSON file
    #[clap(long)]
    pub input: Option<String>,
}

impl Source {
    fn load(&self) -> anyhow::Result<Vector> {
        match (&self.name, &self.input) {
            (Some(n), _) => Ok(vectors::find(n)?.clone()),
            (None, Some(f)) => Ok(Vector::read(f)?),
            (None, None) => Err(anyhow::anyhow!("vector name or --input required")),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load command line options
    let opts = Opts::parse();

    // Setup logging
    let _ = simplelog::SimpleLogger::init(opts.log_level, Default::default());

    debug!("options: {:?}", opts);

    match &opts.command {
        Command::List => {
            for v in vectors::VECTORS.iter() {
                println!("{:<40} {}", v.name, v.description);
            }
        }
        Command::Encode { source } => {
            let v = source.load()?;
            let b = v.encode()?;

            info!("encoded '{}' ({} bytes)", v.name, b.len());
            println!("{}", hex::encode(b));
        }
        Command::Apdus { source } => {
            let v = source.load()?;
            let b = v.encode()?;

            let path = Bip32Path::new(&v.path()?)
                .map_err(|e| anyhow::anyhow!("invalid path: {:?}", e))?;

            let mut buff = [0u8; 256];
            for r in SignChunks::new(path, &b) {
                let n = r
                    .encode(&mut buff)
                    .map_err(|e| anyhow::anyhow!("encode failed: {:?}", e))?;

                println!(
                    "{:02x}{:02x}{:02x}00{:02x}{}",
                    SignTxReq::CLA,
                    SignTxReq::INS,
                    r.p1(),
                    n,
                    hex::encode(&buff[..n])
                );
            }
        }
        Command::Fields { source } => {
            let v = source.load()?;
            for (label, value) in &v.fields {
                println!("{label}: {value}");
            }
        }
    }

    Ok(())
}
