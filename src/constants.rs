pub mod geocode {

    /// Candidates requested from the geocoder; only the best match is used.
    pub const RESULT_COUNT: u32 = 1;
}

pub mod overpass {

    /// Server-side evaluation budget passed in the QL preamble.
    pub const QUERY_TIMEOUT_SECONDS: u32 = 25;
}

pub mod recipes {

    /// TheMealDB spreads ingredients over this many indexed field pairs.
    pub const INGREDIENT_SLOTS: usize = 20;
}
