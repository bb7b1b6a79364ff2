// Example demonstrating the grouplog facility
//
// Run with: cargo run --example grouplog_demo

use grouplog::DEFAULT_GROUP;

fn main() {
    println!("=== grouplog Demo ===\n");

    println!("1. Info logging to the default group (stdout):");
    grouplog::info!("server starting");
    grouplog::info!("listening on {}:{}", "0.0.0.0", 8080);

    println!("\n2. Trace is off by default; enable it at runtime:");
    grouplog::trace!("this line is dropped");
    grouplog::enable_trace(true);
    grouplog::trace!("request parsed in {}us", 12);

    println!("\n3. A named group with its own destination (stderr here):");
    let audit = grouplog::register_group("audit", Box::new(std::io::stderr()), true);
    grouplog::infog!(audit, "user {} logged in", "alice");
    grouplog::traceg!(audit, "session token issued");

    println!("\n4. Groups toggle independently:");
    grouplog::enable_group(audit, false);
    grouplog::infog!(audit, "this line is dropped");
    grouplog::enable_group(audit, true);
    grouplog::infog!(audit, "audit group re-enabled");

    grouplog::enable_group(DEFAULT_GROUP, false);
    grouplog::info!("default group is off, dropped");
    grouplog::enable_group(DEFAULT_GROUP, true);

    println!("\n5. Drain before exit so every buffered line reaches its sink:");
    grouplog::drain();
}
