pub mod application {
    pub mod catalog {
        pub mod refresh;
    }
    pub mod ingredient {
        pub mod batch_delete;
        pub mod create;
        pub mod delete;
        pub mod update;
    }
    pub mod inventory {
        pub mod add_entry;
        pub mod batch_remove;
        pub mod consume;
        pub mod get_overview;
        pub mod remove_entry;
        pub mod update_entry;
    }
    pub mod purchase {
        pub mod add_recipe_to_cart;
        pub mod add_to_cart;
        pub mod batch_remove_from_cart;
        pub mod confirm;
        pub mod delete_order;
        pub mod list_history;
        pub mod refresh_shopping_list;
        pub mod remove_from_cart;
        pub mod reorder;
    }
    pub mod recipe {
        pub mod check;
        pub mod delete;
    }

    #[cfg(test)]
    mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod cache;
        pub mod use_cases {
            pub mod refresh;
        }
    }
    pub mod ingredient {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod use_cases {
            pub mod batch_delete;
            pub mod create;
            pub mod delete;
            pub mod update;
        }
    }
    pub mod inventory {
        pub mod errors;
        pub mod freshness;
        pub mod gateway;
        pub mod model;
        pub mod store;
        pub mod use_cases {
            pub mod add_entry;
            pub mod batch_remove;
            pub mod consume;
            pub mod get_overview;
            pub mod remove_entry;
            pub mod update_entry;
        }
    }
    pub mod purchase {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod shopping_list;
        pub mod use_cases {
            pub mod add_recipe_to_cart;
            pub mod add_to_cart;
            pub mod batch_remove_from_cart;
            pub mod confirm;
            pub mod delete_order;
            pub mod list_history;
            pub mod refresh_shopping_list;
            pub mod remove_from_cart;
            pub mod reorder;
        }
    }
    pub mod recipe {
        pub mod errors;
        pub mod gateway;
        pub mod model;
        pub mod selection;
        pub mod use_cases {
            pub mod check;
            pub mod delete;
        }
    }
    pub mod shared {
        pub mod batch;
    }
}
