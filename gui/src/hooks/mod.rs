pub mod usesession;
