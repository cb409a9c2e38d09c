pub mod application {
    pub mod cart {
        pub mod decrement;
        pub mod get_cart;
        pub mod increment;
    }
    pub mod catalog {
        pub mod get_all;
    }
    pub mod order {
        pub mod submit;
    }
}

pub mod domain {
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod session;
        pub mod store;
        pub mod use_cases {
            pub mod decrement;
            pub mod get_cart;
            pub mod increment;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod provider;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod submit;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
