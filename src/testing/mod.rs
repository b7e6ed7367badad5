pub(crate) mod random_floes;
