#[cfg(test)]
mod common;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod expansion_tests;

#[cfg(test)]
mod sidebar_render_tests;

#[cfg(test)]
mod theme_tests;
