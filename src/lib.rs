pub mod config;

pub mod modules {
    pub mod members {
        pub mod core {
            pub mod member;
            pub mod service;
        }
        pub mod store;
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
