//! Command-line front end for the AnimBlueprint scene-export converter.
//!
//! ```text
//! abx <input.json> <output.txt> [BlueprintClass]
//! ```
//!
//! When the class argument is omitted, the blueprint's generated class is
//! detected from the export's `Outer` references.

use std::env;

use abx_core::abp::{convert_document, SceneDocument};
use anyhow::{anyhow, Result};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        println!("Usage: abx <input.json> <output.txt> [BlueprintClass]");
        println!("\nExamples:");
        println!("  abx ABP_Ch020.json Muscular.txt");
        println!("  abx ABP_Ch020.json Muscular.txt ABP_Ch020_C");
        return Ok(());
    }

    let input = &args[1];
    let output = &args[2];

    let document = SceneDocument::load(input)?;

    let class = match args.get(3) {
        Some(class) => class.clone(),
        None => {
            let detected = document.detect_blueprint_class().ok_or_else(|| {
                anyhow!(
                    "no blueprint class found in {}; pass it as the third argument",
                    input
                )
            })?;
            log::info!("Detected blueprint class {}", detected);
            detected.to_string()
        }
    };

    let result = convert_document(&document, output, &class)?;
    println!(
        "Wrote {} nodes to {}",
        result.node_count,
        result.output_path.display()
    );

    Ok(())
}
