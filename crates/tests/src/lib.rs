#[cfg(test)]
mod common;

#[cfg(test)]
mod fetch_scenario_tests;

#[cfg(test)]
mod modal_scenario_tests;

#[cfg(test)]
mod plantilla_scenario_tests;

#[cfg(test)]
mod tagged_dispatch_tests;
