macro_rules! try_find_attr {
    ($attributes:expr, $name_str:expr) => {{
        let mut value = None;
        for attr in $attributes {
            if attr.name.local_name.as_str() == $name_str {
                value = Some(attr.value.as_str());
            }
        }
        value
    }};
}

macro_rules! find_attr {
    ($attributes:expr, $name_str:expr) => {{
        match try_find_attr!($attributes, $name_str) {
            Some(v) => v,
            None => return Err(format!("Could not find element attribute '{}'", $name_str).into()),
        }
    }};
}
