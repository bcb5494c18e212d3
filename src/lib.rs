pub mod modules {
    pub mod time_logs {
        pub mod core {
            pub mod interval;
            pub mod report;
            pub mod session;
        }
        pub mod use_cases {
            pub mod export_report {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod persist_state {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shared {
    pub mod infrastructure {
        pub mod state_store;
    }
}

pub mod shell;
