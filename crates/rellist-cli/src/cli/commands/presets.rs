//! `rellist presets` – show configured presets.

use rellist_core::config::RellistConfig;

pub fn run_presets(cfg: &RellistConfig) {
    if cfg.presets.is_empty() {
        println!("No presets configured.");
        return;
    }
    println!("{:<16} {:<6} {}", "NAME", "JOBS", "PATTERNS");
    for p in &cfg.presets {
        let patterns = p
            .jobs
            .iter()
            .map(|j| j.pattern.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<16} {:<6} {}", p.name, p.jobs.len(), patterns);
    }
}
