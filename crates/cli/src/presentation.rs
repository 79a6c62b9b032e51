// crates/cli/src/presentation.rs
use decl_count_engine::config::Config;
use decl_count_engine::options::{OutputFormat, OutputMode, SortKey};
use decl_count_engine::stats::{FileStats, RunResult};
use std::cmp::Ordering;
use std::fmt::Write;

pub fn print_results(result: &RunResult, config: &Config) {
    match config.output_mode {
        OutputMode::Total => print_total(result, config),
        OutputMode::Full => print_full(result, config),
    }
}

fn print_total(result: &RunResult, config: &Config) {
    let decls = result.total_declarations();
    let files = result.stats.len();

    match config.format {
        // The bare total, nothing else.
        OutputFormat::Table => println!("{decls}"),
        OutputFormat::Csv => print_total_sv(result, config, ","),
        OutputFormat::Tsv => print_total_sv(result, config, "\t"),
        OutputFormat::Json => {
            let obj = total_value(result, config, files);
            if let Ok(json) = serde_json::to_string_pretty(&obj) {
                println!("{json}");
            }
        }
        OutputFormat::Jsonl => {
            println!("{}", total_value(result, config, files));
        }
    }
}

fn print_total_sv(result: &RunResult, config: &Config, delimiter: &str) {
    let mut header = String::from("declarations");
    let mut row = format!("{}", result.total_declarations());

    if config.count_loops {
        header.push_str(delimiter);
        header.push_str("loops");
        row.push_str(delimiter);
        row.push_str(&result.total_loops().to_string());
    }

    header.push_str(delimiter);
    header.push_str("lines");
    row.push_str(delimiter);
    row.push_str(&result.total_lines().to_string());

    header.push_str(delimiter);
    header.push_str("files");
    row.push_str(delimiter);
    row.push_str(&result.stats.len().to_string());

    println!("{header}");
    println!("{row}");
}

fn total_value(result: &RunResult, config: &Config, files: usize) -> serde_json::Value {
    let mut obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": files,
        "lines": result.total_lines(),
        "declarations": result.total_declarations(),
    });
    if config.count_loops
        && let Some(map) = obj.as_object_mut()
    {
        map.insert("loops".to_string(), result.total_loops().into());
    }
    obj
}

fn print_full(result: &RunResult, config: &Config) {
    let mut stats: Vec<FileStats> = result.stats.clone();
    if !config.sort.is_empty() {
        sort_stats(&mut stats, &config.sort);
    }

    match config.format {
        OutputFormat::Json => print_json(&stats),
        OutputFormat::Jsonl => print_jsonl(&stats, result, config),
        OutputFormat::Csv => print_sv(&stats, config, ","),
        OutputFormat::Tsv => print_sv(&stats, config, "\t"),
        OutputFormat::Table => print_table(&stats, result, config),
    }
}

fn sort_stats(stats: &mut [FileStats], sort: &[(SortKey, bool)]) {
    stats.sort_by(|a, b| {
        for (key, desc) in sort {
            let order = match key {
                SortKey::Decls => a.declarations.cmp(&b.declarations),
                SortKey::Loops => a.loops.unwrap_or(0).cmp(&b.loops.unwrap_or(0)),
                SortKey::Lines => a.lines.cmp(&b.lines),
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Ext => a.ext.cmp(&b.ext),
            };
            if order != Ordering::Equal {
                return if *desc { order.reverse() } else { order };
            }
        }
        Ordering::Equal
    });
}

fn print_table(stats: &[FileStats], result: &RunResult, config: &Config) {
    println!("decl_count v{}", crate::VERSION);
    println!();

    if config.count_loops {
        println!("    DECLS       LOOPS       LINES     FILE");
    } else {
        println!("    DECLS       LINES     FILE");
    }
    println!("----------------------------------------------");

    for s in stats {
        if config.count_loops {
            println!(
                "{:>9}{:>12}{:>12}     {}",
                s.declarations,
                s.loops.unwrap_or(0),
                s.lines,
                s.path.display()
            );
        } else {
            println!("{:>9}{:>12}     {}", s.declarations, s.lines, s.path.display());
        }
    }

    let file_count = stats.len();
    println!("---");
    if config.count_loops {
        println!(
            "{:>9}{:>12}{:>12}     TOTAL ({file_count} files)",
            result.total_declarations(),
            result.total_loops(),
            result.total_lines()
        );
    } else {
        println!(
            "{:>9}{:>12}     TOTAL ({file_count} files)",
            result.total_declarations(),
            result.total_lines()
        );
    }

    println!();
    println!("[decl_count] Completed: {file_count} files processed.");
}

fn print_json(stats: &[FileStats]) {
    if let Ok(json) = serde_json::to_string_pretty(stats) {
        println!("{json}");
    }
}

fn print_jsonl(stats: &[FileStats], result: &RunResult, config: &Config) {
    for s in stats {
        if let Ok(mut v) = serde_json::to_value(s) {
            if let Some(obj) = v.as_object_mut() {
                obj.insert("type".to_string(), "file".into());
            }
            println!("{}", serde_json::to_string(&v).unwrap_or_default());
        }
    }

    println!("{}", total_value(result, config, stats.len()));
}

fn print_sv(stats: &[FileStats], config: &Config, delimiter: &str) {
    let mut header = String::from("declarations");
    if config.count_loops {
        header.push_str(delimiter);
        header.push_str("loops");
    }
    header.push_str(delimiter);
    header.push_str("lines");
    header.push_str(delimiter);
    header.push_str("path");
    println!("{header}");

    for s in stats {
        let mut row = format!("{}", s.declarations);

        if config.count_loops {
            row.push_str(delimiter);
            row.push_str(&s.loops.unwrap_or(0).to_string());
        }

        row.push_str(delimiter);
        row.push_str(&s.lines.to_string());

        row.push_str(delimiter);
        let path = s.path.display().to_string();
        if delimiter == "," && (path.contains(',') || path.contains('"') || path.contains('\n')) {
            let escaped = path.replace('"', "\"\"");
            write!(row, "\"{escaped}\"").unwrap();
        } else {
            row.push_str(&path);
        }

        println!("{row}");
    }

    if config.total_row {
        let total_decls: usize = stats.iter().map(|s| s.declarations).sum();
        let total_loops: usize = stats.iter().filter_map(|s| s.loops).sum();
        let total_lines: usize = stats.iter().map(|s| s.lines).sum();

        let mut row = format!("{total_decls}");
        if config.count_loops {
            row.push_str(delimiter);
            row.push_str(&total_loops.to_string());
        }
        row.push_str(delimiter);
        row.push_str(&total_lines.to_string());
        row.push_str(delimiter);
        row.push_str("TOTAL");
        println!("{row}");
    }
}
