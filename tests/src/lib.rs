#[cfg(test)]
mod support;

#[cfg(test)]
mod query {
    mod integration;
}
