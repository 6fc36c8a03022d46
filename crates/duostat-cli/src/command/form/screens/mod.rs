pub use self::calculator::CalculatorScreen;

mod calculator;
