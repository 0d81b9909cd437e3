//! Listing output and the verification report.

use std::collections::HashMap;

use apt_filter_domain::model::Complex;
use serde::Serialize;

use crate::args::{OutputFormat, SortKey};
use crate::config::ListOptions;
use crate::scenario::Outcome;

/// Print the matching records in the requested shape.
pub fn print_matches(mut selected: Vec<&Complex>, total: usize, options: &ListOptions) {
    if options.count_only {
        println!("{}", selected.len());
        return;
    }

    if let Some(key) = options.sort {
        sort_matches(&mut selected, key, options.desc);
    }

    match options.format {
        OutputFormat::Table => output_table(&selected, total, options),
        OutputFormat::Csv => output_delimited(&selected, options, ','),
        OutputFormat::Tsv => output_delimited(&selected, options, '\t'),
        OutputFormat::Json => output_json(&selected, total),
    }
}

fn sort_matches(selected: &mut [&Complex], key: SortKey, desc: bool) {
    selected.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Dong => a.dong.cmp(&b.dong),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::AvgPrice => price_key(a.avg_price).total_cmp(&price_key(b.avg_price)),
            SortKey::PyeongPrice => {
                price_key(a.pyeong_price()).total_cmp(&price_key(b.pyeong_price()))
            }
            SortKey::Transactions => a.transactions().cmp(&b.transactions()),
        };
        if desc { ordering.reverse() } else { ordering }
    });
}

// Priceless records sort below every priced one.
fn price_key(price: Option<f64>) -> f64 {
    price.unwrap_or(f64::NEG_INFINITY)
}

fn limited<'a, 'b>(selected: &'b [&'a Complex], options: &ListOptions) -> &'b [&'a Complex] {
    let limit = options.top.unwrap_or(selected.len()).min(selected.len());
    &selected[..limit]
}

fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "-".to_string(), |v| format!("{v:.0}"))
}

fn format_pyeong_price(price: Option<f64>) -> String {
    price.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn output_table(selected: &[&Complex], total: usize, options: &ListOptions) {
    println!();
    println!("{:>10}\t{:>12}\t{:>4}\t{}\t{}", "AVG PRICE", "PYEONG PRICE", "TX", "DONG", "NAME");
    println!("----------------------------------------------------------------");

    for complex in limited(selected, options) {
        println!(
            "{:>10}\t{:>12}\t{:>4}\t{}\t{}",
            format_price(complex.avg_price),
            format_pyeong_price(complex.pyeong_price()),
            complex.transactions(),
            complex.dong,
            complex.name
        );
    }
    println!("---");

    if options.by_dong {
        output_by_dong(selected);
    }

    println!("{} of {} complexes\n", selected.len(), total);
}

fn output_by_dong(selected: &[&Complex]) {
    println!("[By District]");
    for (dong, count) in aggregate_by_dong(selected) {
        println!("{count:>6}\t{dong}");
    }
    println!("---");
}

fn aggregate_by_dong(selected: &[&Complex]) -> Vec<(String, usize)> {
    let mut by_dong: HashMap<&str, usize> = HashMap::new();
    for complex in selected {
        *by_dong.entry(complex.dong.as_str()).or_insert(0) += 1;
    }
    let mut counts: Vec<(String, usize)> =
        by_dong.into_iter().map(|(dong, count)| (dong.to_string(), count)).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

fn output_delimited(selected: &[&Complex], options: &ListOptions, sep: char) {
    println!("dong{sep}name{sep}avg_price{sep}pyeong_price{sep}transactions");
    for complex in limited(selected, options) {
        println!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            escape_if_needed(&complex.dong, sep),
            escape_if_needed(&complex.name, sep),
            format_price(complex.avg_price),
            format_pyeong_price(complex.pyeong_price()),
            complex.transactions()
        );
    }
}

fn escape_if_needed(field: &str, sep: char) -> String {
    if sep == ',' && (field.contains(',') || field.contains('"')) {
        let escaped = field.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        field.to_string()
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    complexes: &'a [&'a Complex],
    summary: JsonSummary,
}

#[derive(Debug, Serialize)]
struct JsonSummary {
    matched: usize,
    total: usize,
}

fn output_json(selected: &[&Complex], total: usize) {
    let output = JsonOutput {
        complexes: selected,
        summary: JsonSummary { matched: selected.len(), total },
    };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("JSON output error: {e}"),
    }
}

/// Print the verification report. Returns whether every scenario
/// passed.
pub fn print_report(outcomes: &[Outcome]) -> bool {
    let total = outcomes.len();
    for (index, outcome) in outcomes.iter().enumerate() {
        if outcome.passed() {
            println!(
                "PASS [{}/{total}] {} — expected {}, actual {}",
                index + 1,
                outcome.name,
                outcome.expected,
                outcome.actual
            );
        } else {
            println!(
                "FAIL [{}/{total}] {} — expected {}, actual {} (diff {:+})",
                index + 1,
                outcome.name,
                outcome.expected,
                outcome.actual,
                outcome.diff()
            );
        }
    }

    let failures: Vec<&Outcome> = outcomes.iter().filter(|o| !o.passed()).collect();
    let passed = total - failures.len();

    println!();
    println!("Verification Summary");
    println!("--------------------");
    println!("Scenarios: {total}");
    println!("Passed: {passed} ({})", percentage(passed, total));
    println!("Failed: {} ({})", failures.len(), percentage(failures.len(), total));

    if !failures.is_empty() {
        println!();
        println!("### Failed Scenarios");
        for (index, outcome) in failures.iter().enumerate() {
            println!(
                "{}. {} — expected {}, actual {} (diff {:+})",
                index + 1,
                outcome.name,
                outcome.expected,
                outcome.actual,
                outcome.diff()
            );
        }
    }
    println!();

    failures.is_empty()
}

fn percentage(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}
