
pub mod service {
    pub mod config_service;
    pub mod error;
    pub mod font;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
    pub mod gui;
    pub mod shell;
}

pub mod facade {
    pub mod conversion_facade;
    pub mod job_runner;
    pub mod traits {
        pub mod i_conversion;
    }
}

pub mod models {
    pub mod conversion;
    pub mod event;
    pub mod font;
}

pub mod utils {
    pub mod file;
    pub mod utils;
}
