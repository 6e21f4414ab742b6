//! Example: Convert an FModel AnimBlueprint export to paste text.
//!
//! Run with: cargo run --example convert_abp -- ABP_Ch020.json out.txt ABP_Ch020_C

use std::env;

use abx_core::abp::convert;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        println!("Usage: convert_abp <input.json> <output.txt> <BlueprintClass>");
        println!("\nExample:");
        println!("  cargo run --example convert_abp -- ABP_Ch020.json Muscular.txt ABP_Ch020_C");
        return;
    }

    match convert(&args[1], &args[2], &args[3]) {
        Ok(result) => {
            println!("\n=== {} ===", result.output_path.display());
            println!("Nodes: {}", result.node_count);
            println!("Bytes: {}", result.text.len());
        }
        Err(e) => eprintln!("Conversion failed: {}", e),
    }
}
