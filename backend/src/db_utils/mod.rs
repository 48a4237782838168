pub mod supabase_utils;
