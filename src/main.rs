use log::info;
use mips_cpu::{load_image, Config, PagedMemory, Processor};
use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt)]
struct CliArgs {
    /// Disables jump/branch delay slots
    #[structopt(long)]
    disable_delay_slots: bool,

    /// Diagnostic verbosity of the simulated CPU (0 is silent)
    #[structopt(long, default_value = "0")]
    debug_level: u32,

    /// Address of the first instruction
    #[structopt(long, parse(try_from_str = parse_address), default_value = "0")]
    entry: u32,

    /// Stop after this many instructions
    #[structopt(long, default_value = "10000000")]
    step_limit: u64,

    /// Flat binary image, loaded at address zero
    #[structopt(parse(from_os_str))]
    file_path: PathBuf,
}

fn parse_address(input: &str) -> Result<u32, std::num::ParseIntError> {
    if let Some(hex) = input.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        input.parse()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Setup logging and parse CLI args
    env_logger::init();
    let args = CliArgs::from_args();

    let mut memory = PagedMemory::new();
    load_image(&mut memory, &args.file_path)?;
    info!("Loaded image from {}", args.file_path.display());

    let mut processor = Processor::with_config(
        memory,
        Config {
            disable_delay_slots: args.disable_delay_slots,
        },
    );
    processor.set_debug_level(args.debug_level, None);
    processor.set_program_counter(args.entry);

    for _ in 0..args.step_limit {
        if let Err(fault) = processor.step() {
            println!(
                "Stopped: {} (pc = 0x{:08x})",
                fault,
                processor.program_counter()
            );
            return Ok(());
        }
    }

    println!(
        "Step limit reached (pc = 0x{:08x})",
        processor.program_counter()
    );
    Ok(())
}
