use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sob_tally::analysis::{decode_mojibake, Marker};
use sob_tally::export::{discover_exports, load_export};

fn main() {
    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if args.is_empty() {
        eprintln!("usage: inspect_export <message_N.json | export dir>...");
        std::process::exit(2);
    }

    let marker = Marker::default();
    let mut senders: HashMap<String, (usize, usize)> = HashMap::new();

    for path in expand(&args) {
        match load_export(&path) {
            Ok(export) => {
                println!("{:?}", path);
                if let Some(title) = export.title.as_deref() {
                    println!("    title: {}", readable(title));
                }
                let names: Vec<String> = export.participants.iter().map(|p| readable(&p.name)).collect();
                println!("    participants: {}", names.join(", "));
                println!("    messages: {}", export.messages.len());

                for msg in &export.messages {
                    let entry = senders.entry(msg.sender.clone()).or_default();
                    entry.0 += 1;
                    entry.1 += msg.body.as_deref().map_or(0, |b| marker.count_in(b));
                }
            }
            Err(e) => println!("{:?}: {:#}", path, anyhow::Error::from(e)),
        }
    }

    let mut sorted: Vec<_> = senders.into_iter().collect();
    sorted.sort_by(|a, b| b.1 .0.cmp(&a.1 .0));

    println!("\nSenders by message count ({} markers):", marker.display());
    for (sender, (messages, markers)) in sorted {
        // Debug formatting keeps exact spacing visible for the config's `sender`
        println!("{:>8} {:>6}  {:?}  ({})", messages, markers, sender, readable(&sender));
    }
}

/// Directories expand to their message_<n>.json files
fn expand(args: &[PathBuf]) -> Vec<PathBuf> {
    args.iter()
        .flat_map(|arg| {
            if Path::new(arg).is_dir() {
                discover_exports(arg).unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    Vec::new()
                })
            } else {
                vec![arg.clone()]
            }
        })
        .collect()
}

fn readable(text: &str) -> String {
    decode_mojibake(text).unwrap_or_else(|| text.to_string())
}
