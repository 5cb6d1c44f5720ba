use erdkit::relations::infer_relationships;
use erdkit::sql::{Dialect, FkStyle, SqlOptions, generate_sql, parse_sql};
use erdkit::validate::{Severity, validate};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.sql> [options]", args[0]);
        eprintln!();
        eprintln!("Options:");
        eprintln!("  -o, --output <file>     Output file (default: stdout)");
        eprintln!("  -d, --dialect <name>    Dialect: generic, postgres (default: generic)");
        eprintln!("  -f, --fk-style <style>  Foreign keys: inline, named (default: inline)");
        eprintln!("      --check             Validate and print findings instead of generating");
        eprintln!("      --json              Emit the parsed schema as JSON");
        process::exit(1);
    }

    let input_path = &args[1];
    let mut output_path: Option<String> = None;
    let mut dialect = Dialect::Generic;
    let mut fk_style = FkStyle::Inline;
    let mut check = false;
    let mut json = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "-d" | "--dialect" => {
                i += 1;
                if i < args.len() {
                    dialect = Dialect::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid dialect: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "-f" | "--fk-style" => {
                i += 1;
                if i < args.len() {
                    fk_style = FkStyle::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Invalid fk style: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "--check" => check = true,
            "--json" => json = true,
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let input = match fs::read_to_string(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", input_path, e);
            process::exit(1);
        }
    };

    let mut schema = match parse_sql(&input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        }
    };
    schema.relationships = infer_relationships(&schema);

    if check {
        let findings = validate(&schema);
        let mut errors = 0;
        for finding in &findings {
            match finding.severity {
                Severity::Error => {
                    errors += 1;
                    eprintln!("error: {}", finding.message);
                }
                Severity::Warning => eprintln!("warning: {}", finding.message),
            }
        }
        if findings.is_empty() {
            eprintln!("schema is consistent");
        }
        process::exit(if errors > 0 { 1 } else { 0 });
    }

    let output = if json {
        match serde_json::to_string_pretty(&schema) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to encode schema: {}", e);
                process::exit(1);
            }
        }
    } else {
        generate_sql(
            &schema,
            SqlOptions {
                dialect,
                foreign_keys: fk_style,
            },
        )
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}
