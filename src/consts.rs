/// Upper bound of every progress percentage
pub const MAX_PERCENT: f64 = 100.0;

/// Separator between sub-activity tokens: `A:80|100;B:60`
pub const TOKEN_SEPARATOR: char = ';';

/// Separator between a sub-activity name and its values
pub const NAME_SEPARATOR: char = ':';

/// Separator between a sub-activity's actual and planned values
pub const PAIR_SEPARATOR: char = '|';

/// Source read when neither the command line nor the config names one
pub const DEFAULT_SOURCE: &str = "data/csv/frentes_filtrado.csv";

/// Image served for names missing from the lookup table
pub const DEFAULT_IMAGE: &str = "/static/images/default.png";
