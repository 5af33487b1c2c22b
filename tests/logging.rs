use auraframefx_native::common::log::init;
use auraframefx_native::BridgeCfg;
use log::LevelFilter;

#[test]
fn first_init_wins() {
    let debug = BridgeCfg {
        log_level: LevelFilter::Debug,
        ..BridgeCfg::default()
    };
    init(&debug);
    assert_eq!(log::max_level(), LevelFilter::Debug);

    let quiet = BridgeCfg {
        log_level: LevelFilter::Error,
        ..BridgeCfg::default()
    };
    init(&quiet);
    assert_eq!(log::max_level(), LevelFilter::Debug);
}
