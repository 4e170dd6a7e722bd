mod listing_test;
mod registration_test;
mod router_test;
