//! Column names of the upstream tables and how each series is shown.

/// A table column with its display label and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Series {
    pub column: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

const fn series(column: &'static str, label: &'static str, color: &'static str) -> Series {
    Series { column, label, color }
}

pub const HYDRO: Series = series("Hidraulica_MW", "Hydro", "#1f77b4");
pub const NUCLEAR: Series = series("Nuclear_MW", "Nuclear", "#ff7f0e");
pub const COMBINED_CYCLE: Series = series("CicloCombinado_MW", "Combined cycle", "#2ca02c");
pub const WIND: Series = series("Eolica_MW", "Wind", "#d62728");
pub const SOLAR_PV: Series = series("SolarFotovoltaica_MW", "Solar PV", "#9467bd");
pub const SOLAR_THERMAL: Series = series("SolarTermica_MW", "Solar thermal", "#8c564b");
pub const COAL: Series = series("Carbon_MW", "Coal", "#7f7f7f");
pub const FUEL_GAS: Series = series("FuelGas_MW", "Fuel/Gas", "#bcbd22");
pub const RENEWABLE_THERMAL: Series = series("TermicaRenovable_MW", "Renewable thermal", "#e377c2");
pub const COGENERATION_AND_WASTE: Series =
    series("CogeneracionYResiduos_MW", "Cogeneration & waste", "#17becf");
pub const COGENERATION: Series = series("Cogeneracion_PBF_MW", "Cogeneration", "#17becf");
pub const NON_RENEWABLE_WASTE: Series = series("ResiduosNoRen_PBF_MW", "Non-renewable waste", "#aec7e8");

pub const DEMAND: Series = series("DemandaReal_MW", "Actual demand", "black");
pub const EXCHANGE_BALANCE: Series = series("SaldoIntercambios_MW", "Interchange balance", "dodgerblue");
pub const PRICE: Series = series("PrecioMercado_EUR_MWh", "Price", "forestgreen");

pub const RENEWABLE_COVERAGE: Series = series("CoberturaRenovable_pct", "Renewable coverage (%)", "#2ca02c");
pub const NON_EMITTING_COVERAGE: Series =
    series("CoberturaNoEmisora_pct", "Non-emitting coverage (%)", "#1f77b4");

/// Total generation in the incident table.
pub const TOTAL_GENERATION: &str = "TotalGeneracion_MW";
/// Candidate total-generation columns of the hourly table, in preference order.
pub const HOURLY_TOTALS: [&str; 2] = ["TotalGeneracion_MW", "TotalGeneracionMix_MW_Horario"];

/// Technologies stacked in the 15-minute incident mix.
pub const INCIDENT_MIX: [Series; 10] = [
    HYDRO,
    NUCLEAR,
    COMBINED_CYCLE,
    WIND,
    SOLAR_PV,
    SOLAR_THERMAL,
    COAL,
    FUEL_GAS,
    RENEWABLE_THERMAL,
    COGENERATION_AND_WASTE,
];

/// Technologies of the long-horizon monthly mix.
pub const EVOLUTION_MIX: [Series; 10] = [
    HYDRO,
    NUCLEAR,
    COMBINED_CYCLE,
    WIND,
    SOLAR_PV,
    SOLAR_THERMAL,
    COAL,
    RENEWABLE_THERMAL,
    COGENERATION,
    NON_RENEWABLE_WASTE,
];

/// Series drawn as ramp subplots, top to bottom.
pub const RAMP_PLOTS: [Series; 3] = [DEMAND, WIND, SOLAR_PV];

/// Series summarised in the ramp KPI panel.
pub const RAMP_KPIS: [Series; 5] = [DEMAND, WIND, SOLAR_PV, COMBINED_CYCLE, HYDRO];

/// Series compared between the first and last year of the hourly table.
pub const TREND_KPIS: [Series; 4] = [WIND, SOLAR_PV, COAL, COMBINED_CYCLE];

pub const COVERAGE: [Series; 2] = [RENEWABLE_COVERAGE, NON_EMITTING_COVERAGE];

pub fn columns(series: &[Series]) -> Vec<&'static str> {
    series.iter().map(|s| s.column).collect()
}
