//! Generates a design holding one threshold box: a HierarchicalBox that
//! branches its input into an IS_GreaterThan condition and a CONST fallback,
//! selected by an IF.

use clap::Parser;
use std::path::PathBuf;
use va_script::{params, Connect, Design, Module, Result, Scope, Script, ScriptConfig};

#[derive(Parser)]
#[command(name = "hierarchical_box")]
#[command(about = "Generate a VisualApplets TCL script with a threshold box")]
struct Args {
    /// Script file to write; standard output when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON configuration (output file and layout grid)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target platform
    #[arg(short, long, default_value = "mE5-MA-VCLx")]
    platform: String,

    /// Design name
    #[arg(short, long, default_value = "Example")]
    name: String,
}

/// Build the threshold box under `parent` at grid cell (`x`, `y`)
fn threshold_box<S: Scope>(parent: &S, name: &str, x: u32, y: u32) -> Result<Module> {
    let boxed = parent
        .module("HierarchicalBox", name)
        .inputs(1)
        .outputs(1)
        .at(x, y)
        .create()?;

    let branch = boxed.module("BRANCH", "Branch").outputs(3).at(1, 1).create()?;
    let condition = boxed.module("IS_GreaterThan", "Condition").at(2, 2).create()?;
    let value = boxed.module("CONST", "Value").at(2, 3).create()?;
    let decision = boxed.module("IF", "Decision").at(3, 1).create()?;

    // Wire from left to right
    boxed.port_named("INBOUND").connect_to(&branch)?;
    branch.port_index(0).connect_to(&decision)?;
    branch
        .port_index(1)
        .connect_to(&condition)?
        .connect_to(decision.port_named("C"))?;
    branch
        .port_index(2)
        .connect_to(&value)?
        .connect_to(decision.port_named("E"))?;
    decision.connect_to(boxed.port_named("OUTBOUND"))?;

    // The CONST output link must match the BRANCH input link
    params!(branch.port_named("I"), {
        "Bit Width" => 16,
        "Arithmetic" => "signed",
    })?;
    params!(value.port_named("O"), {
        "Bit Width" => 16,
        "Arithmetic" => "signed",
    })?;

    condition.set_param("Number", 0)?;
    value.set_param("Value", 0)?;

    Ok(boxed)
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ScriptConfig::from_file(path)?,
        None => ScriptConfig::default(),
    };
    if let Some(output) = args.output {
        config = config.with_output(output);
    }

    let script = Script::from_config(&config)?;
    let design: Design = script.design(&args.platform).name(&args.name).create()?;
    threshold_box(&design, "Example", 1, 2)?;

    log::info!("Generated {} commands", script.emitted());
    Ok(())
}

fn main() {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(err) = run(Args::parse()) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
