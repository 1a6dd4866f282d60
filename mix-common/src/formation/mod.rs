pub mod observer;

pub use self::observer::FormationEvent;
pub use self::observer::FormationObserver;
pub use self::observer::LogObserver;
pub use self::observer::NullObserver;



pub mod draft;

pub use self::draft::Ranked;
pub use self::draft::TeamDraft;



pub mod captain;

pub use self::captain::select_captain;
pub use self::captain::CaptainChoice;



pub mod pairs;

pub use self::pairs::form_pairs;



pub mod snake;

pub use self::snake::form_snake_teams;



pub mod balance;

pub use self::balance::BalanceSettings;
pub use self::balance::BalanceOutcome;



pub mod orchestrator;

pub use self::orchestrator::form_teams;
pub use self::orchestrator::form_teams_with;
