pub mod translation_use_case;
