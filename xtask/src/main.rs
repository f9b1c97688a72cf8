// Licensed under the Apache-2.0 license

use clap::{Parser, Subcommand};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

mod irq_gen;

#[derive(Parser)]
#[command(
    name = "xtask",
    author,
    version,
    about = "Build-time generators for the MCU firmware tree",
    long_about = None
)]
struct Xtask {
    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate nvic.h, irqhandlers.h and vector_nvic.c from an irq.json descriptor
    IrqGen {
        /// Path to the irq.json descriptor
        #[arg(short, long, value_name = "FILE")]
        descriptor: PathBuf,

        /// Destination of the NVIC header
        #[arg(long, value_name = "FILE", required = true)]
        nvic_header: PathBuf,

        /// Destination of the CMSIS compatibility header
        #[arg(long, value_name = "FILE", required = true)]
        cmsis_header: PathBuf,

        /// Destination of the vector table fragment
        #[arg(long, value_name = "FILE", required = true)]
        vector_fragment: PathBuf,

        /// Show the descriptor path relative to this directory in generated files
        #[arg(long, value_name = "DIR")]
        sources_root: Option<PathBuf>,

        /// Fail if the outputs are not up to date instead of writing them
        #[arg(long, default_value_t = false, conflicts_with = "stdout")]
        check: bool,

        /// Print the generated files instead of writing them
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },
}

fn main() {
    let cli = Xtask::parse();
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .unwrap_or_else(|e| eprintln!("Failed to initialize logging: {e}"));

    let result = match &cli.xtask {
        Commands::IrqGen {
            descriptor,
            nvic_header,
            cmsis_header,
            vector_fragment,
            sources_root,
            check,
            stdout,
        } => {
            let mut config = mcu_irq_generator::GeneratorConfig::new(
                descriptor,
                nvic_header,
                cmsis_header,
                vector_fragment,
            );
            if let Some(root) = sources_root {
                config = config.sources_root(root);
            }
            let mode = if *check {
                irq_gen::Mode::Check
            } else if *stdout {
                irq_gen::Mode::Print
            } else {
                irq_gen::Mode::Write
            };
            irq_gen::run(&config, mode)
        }
    };
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(-1);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: [&str; 10] = [
        "xtask",
        "irq-gen",
        "--descriptor",
        "irq.json",
        "--nvic-header",
        "nvic.h",
        "--cmsis-header",
        "irqhandlers.h",
        "--vector-fragment",
        "vector_nvic.c",
    ];

    #[test]
    fn test_irq_gen_accepts_all_paths() {
        let cli = Xtask::try_parse_from(FULL).unwrap();
        let Commands::IrqGen { cmsis_header, .. } = cli.xtask;
        assert_eq!(cmsis_header, PathBuf::from("irqhandlers.h"));
    }

    #[test]
    fn test_irq_gen_requires_every_output_path() {
        // Drop one flag/value pair at a time.
        for skip in [4, 6, 8] {
            let args: Vec<&str> = FULL
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip && *i != skip + 1)
                .map(|(_, arg)| *arg)
                .collect();
            assert!(Xtask::try_parse_from(&args).is_err(), "{args:?}");
        }
    }

    #[test]
    fn test_check_conflicts_with_stdout() {
        let mut args = FULL.to_vec();
        args.extend(["--check", "--stdout"]);
        assert!(Xtask::try_parse_from(args).is_err());
    }
}
