use site_behavior::config::BehaviorConfig;

fn main() {
    if let Err(err) = site_behavior::run(BehaviorConfig::default()) {
        log::error!("Failed to start page behaviors: {}", err);
    }
}
