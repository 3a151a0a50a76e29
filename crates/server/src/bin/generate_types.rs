use std::{env, fs, path::PathBuf};

use db::{
    models::{batch::Batch, cleaning_log::CleaningLog, order::Order, stock_item::StockItem},
    record::{RecordCard, RecordKind},
    schema::{Draft, FieldError, FieldValue, ValidationErrors},
};
use services::services::{
    config::{Config, StorageKeys},
    listing::ListView,
    overview::{Overview, OverviewSummary},
    shell::{Tab, TabInfo},
};
use ts_rs::TS;
use utils::response::ApiResponse;

fn generate_types_content() -> String {
    let header = "// This file was generated by `generate_types`. Do not edit by hand.\n\n";
    let decls = [
        ApiResponse::<(), ()>::decl(),
        RecordKind::decl(),
        RecordCard::decl(),
        Batch::decl(),
        Order::decl(),
        StockItem::decl(),
        CleaningLog::decl(),
        FieldValue::decl(),
        Draft::decl(),
        FieldError::decl(),
        ValidationErrors::decl(),
        ListView::decl(),
        OverviewSummary::decl(),
        Overview::decl(),
        Tab::decl(),
        TabInfo::decl(),
        Config::decl(),
        StorageKeys::decl(),
    ];
    let body = decls
        .into_iter()
        .map(|decl| format!("export {}", decl.trim_start()))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{header}{body}\n")
}

fn main() {
    let check_mode = env::args().any(|arg| arg == "--check");
    let shared_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../shared");
    let types_path = shared_path.join("types.ts");
    let generated = generate_types_content();

    if check_mode {
        let current = fs::read_to_string(&types_path).unwrap_or_default();
        if current == generated {
            println!("✅ shared/types.ts is up to date.");
            std::process::exit(0);
        } else {
            eprintln!("❌ shared/types.ts is not up to date. Run `cargo run --bin generate_types`.");
            std::process::exit(1);
        }
    }

    if let Err(e) = fs::create_dir_all(&shared_path) {
        eprintln!("Failed to create {}: {e}", shared_path.display());
        std::process::exit(1);
    }
    if let Err(e) = fs::write(&types_path, generated) {
        eprintln!("Failed to write {}: {e}", types_path.display());
        std::process::exit(1);
    }
    println!("✅ TypeScript types generated in {}", types_path.display());
}
