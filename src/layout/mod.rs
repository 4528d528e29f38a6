pub(crate) mod measure;
