pub mod admin_user_seed;
