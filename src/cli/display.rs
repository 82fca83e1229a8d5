use console::style;

use casetrail_core::{EventCategory, Timeline, TimelineStats};

const EVENT_WIDTH: usize = 13;

pub fn print_timeline(timeline: &Timeline) {
    for record in timeline {
        println!(
            "{}  {}  {}",
            style(record.date_string()).bold(),
            style(format!("{:<width$}", record.category(), width = EVENT_WIDTH)).cyan(),
            style(record.persons_field()).dim()
        );
        println!("{:indent$}{}", "", record.description(), indent = 12);
    }
}

pub fn print_empty_notice() {
    eprintln!(
        "{} No dates/events detected in this document.",
        style("warning:").yellow().bold()
    );
    eprintln!("  Dates are recognized as \"5 Jan 2020\" or \"January 5, 2020\".");
}

pub fn print_stats(stats: &TimelineStats) {
    println!("{}", style("Timeline statistics").bold());
    println!("  Total events:      {}", stats.total_events);
    println!("  Event types:       {}", stats.event_types);
    println!("  Duration (days):   {}", stats.duration_days);
    println!(
        "  Most common event: {}",
        stats
            .most_common
            .as_ref()
            .map_or("N/A", EventCategory::as_str)
    );

    println!();
    println!("{}", style("Event distribution").bold());
    for (category, count) in &stats.distribution {
        println!("  {:<width$}  {count}", category.as_str(), width = EVENT_WIDTH);
    }
}

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{bytes}B")
    }
}
