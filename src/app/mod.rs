// Setup helpers that live outside the scan/report core.

pub mod bootstrap;
