pub mod allowed_method;
