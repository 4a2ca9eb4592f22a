use std::time::Duration;
use std::thread;
use log::info;

pub fn page_delay(delay: Duration) {
    pause("Page Delay", delay);
}

pub fn failure_backoff(delay: Duration) {
    pause("Failure Backoff", delay);
}

fn pause(label: &str, delay: Duration) {
    if delay.is_zero() {
        return;
    }
    info!("Waiting for {} ms ({})...", delay.as_millis(), label);
    thread::sleep(delay);
}
