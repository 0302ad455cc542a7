use std::thread;
use std::time::Duration;

use swatchman::Registry;

fn chew(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

fn report(reg: &Registry, name: &str) {
    match reg.get(name).and_then(|sw| sw.read_secs()) {
        Some(secs) => println!("{:<8} {:.3}s", name, secs),
        None => println!("{:<8} (not measured)", name),
    }
}

fn main() {
    env_logger::init();

    let reg = Registry::global();
    let total = reg.stopwatch(Some("total"), true);

    reg.stopwatch(Some("parse"), true);
    chew(120);
    reg.get("parse").unwrap().stop();

    let render = reg.stopwatch(Some("render"), false);
    render.start();
    chew(80);
    render.stop();

    // registered but never started
    reg.stopwatch(Some("flush"), false);

    total.stop();

    println!("{} timers registered", reg.count());
    for name in ["parse", "render", "flush", "total"] {
        report(reg, name);
    }
}
