#[cfg(test)]
mod evaluation;
#[cfg(test)]
mod profile;
