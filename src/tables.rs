use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{calculator::Estimate, scenario::Scenario},
    fmt::{FormattedCost, FormattedPercentage},
    quantity::currency::Cost,
};

#[must_use]
pub fn build_scenario_table(scenario: &Scenario) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec!["Battery", "From", "To", "Charger", "Mode", "Efficiency"])
        .add_row(vec![
            Cell::new(format!("{:.2}", scenario.battery_capacity))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(scenario.start_state_of_charge))
                .set_alignment(CellAlignment::Right),
            Cell::new(FormattedPercentage(scenario.end_state_of_charge))
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}", scenario.charger_power)).set_alignment(CellAlignment::Right),
            Cell::new(scenario.mode).fg(scenario.mode.color()),
            Cell::new(format!("{:.2}", scenario.charge_efficiency))
                .set_alignment(CellAlignment::Right),
        ]);
    table
}

#[must_use]
pub fn build_estimate_table(estimate: &Estimate, currency_symbol: &str) -> Table {
    let cost = |cost: Cost| FormattedCost { cost, symbol: currency_symbol };
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec!["Estimate", "Value"]);
    for (label, value) in [
        ("Energy to battery", format!("{:.2}", estimate.energy_to_pack)),
        ("Energy from grid", format!("{:.2}", estimate.energy_from_grid)),
        ("Time to charge", format!("{:.2}", estimate.charge_time)),
        ("Electricity cost", cost(estimate.electricity_cost).to_string()),
        ("Degradation cost", cost(estimate.degradation_cost).to_string()),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(cost(estimate.total_cost))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(Color::Yellow),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_table_contains_figures() {
        let estimate = Estimate::from_scenario(&Scenario::default()).unwrap();
        let table = build_estimate_table(&estimate, "₹");
        let rendered = table.to_string();
        assert!(rendered.contains("Total"));
        assert!(rendered.contains("3.04 kWh"));
        assert!(rendered.contains("₹5.60"));
        assert!(rendered.contains("₹32.99"));
    }

    #[test]
    fn scenario_table_contains_inputs() {
        let rendered = build_scenario_table(&Scenario::default()).to_string();
        assert!(rendered.contains("4.00 kWh"));
        assert!(rendered.contains("20%"));
        assert!(rendered.contains("90%"));
        assert!(rendered.contains("fast"));
    }
}
