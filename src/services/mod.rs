pub mod market_clock;
pub mod signals;

pub use market_clock::{is_intraday_active, MarketClock};
pub use signals::{
    build_snapshot, build_snapshot_with_quote, evaluate, evaluate_intraday, evaluate_long_term,
    should_alert, SignalEngine,
};
