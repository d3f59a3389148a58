// Application layer: turns parsed commands into calls on the core and renders the results.

pub mod runner;
