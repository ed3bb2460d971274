//! Dashboard controller
//!
//! Owns the [`ViewState`] and decides which loads to run. The controller never
//! awaits anything itself: each operation hands back a [`PendingLoad`], the
//! caller runs [`execute`] wherever it keeps its async runtime, and the
//! outcome comes back through [`DashboardController::finish`]. Results whose
//! token went stale in the meantime are dropped there.

use crate::api::{ApiError, MarketData};
use crate::input::{normalize_ticker, parse_days, FieldId, TextField, ValidationError};
use crate::models::{Company, ComparisonResult, HealthStatus, SeriesPoint, StockSummary, VolatilityMetrics};
use crate::navigation::{LoadKind, LoadToken, LoadTracker, Section};
use crate::settings::DisplaySettings;
use crate::view::{
    render_comparison, render_stat_panel, render_volatility_panel, CompanyDirectory, ComparisonCards,
    PriceChart, ReturnsChart, StatPanel, TopMovers,
};

// =============================================================================
// Load state
// =============================================================================

/// Loading state for async data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// Show a spinner unless there is already content to keep on screen
    fn begin(&mut self) {
        if !self.is_loaded() {
            *self = LoadState::Loading;
        }
    }

    /// Drop a spinner whose load was cancelled
    fn cancel(&mut self) {
        if self.is_loading() {
            *self = LoadState::NotLoaded;
        }
    }

    /// A failed load only replaces a spinner; loaded content stays as it was
    fn fail(&mut self, message: String) {
        if !self.is_loaded() {
            *self = LoadState::Error(message);
        }
    }
}

// =============================================================================
// View models held by the state
// =============================================================================

/// Charts and stats for one analyzed ticker
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub ticker: String,
    pub days: u32,
    pub price_chart: PriceChart,
    pub returns_chart: ReturnsChart,
    pub stats: StatPanel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView {
    pub ticker1: String,
    pub ticker2: String,
    pub days: u32,
    pub cards: ComparisonCards,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VolatilityView {
    pub ticker: String,
    pub days: u32,
    pub panel: StatPanel,
}

/// Text fields of every section
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    pub company_filter: TextField,
    pub analysis_ticker: TextField,
    pub analysis_days: TextField,
    pub compare_ticker1: TextField,
    pub compare_ticker2: TextField,
    pub compare_days: TextField,
}

impl Fields {
    fn new(default_days: u32) -> Self {
        let days = default_days.to_string();
        Self {
            company_filter: TextField::new().max_length(64),
            analysis_ticker: TextField::new().max_length(20),
            analysis_days: TextField::digits().with_value(days.clone()),
            compare_ticker1: TextField::new().max_length(20),
            compare_ticker2: TextField::new().max_length(20),
            compare_days: TextField::digits().with_value(days),
        }
    }

    pub fn get(&self, id: FieldId) -> &TextField {
        match id {
            FieldId::CompanyFilter => &self.company_filter,
            FieldId::AnalysisTicker => &self.analysis_ticker,
            FieldId::AnalysisDays => &self.analysis_days,
            FieldId::CompareTicker1 => &self.compare_ticker1,
            FieldId::CompareTicker2 => &self.compare_ticker2,
            FieldId::CompareDays => &self.compare_days,
        }
    }

    fn get_mut(&mut self, id: FieldId) -> &mut TextField {
        match id {
            FieldId::CompanyFilter => &mut self.company_filter,
            FieldId::AnalysisTicker => &mut self.analysis_ticker,
            FieldId::AnalysisDays => &mut self.analysis_days,
            FieldId::CompareTicker1 => &mut self.compare_ticker1,
            FieldId::CompareTicker2 => &mut self.compare_ticker2,
            FieldId::CompareDays => &mut self.compare_days,
        }
    }
}

/// Everything the dashboard shows. Starts on [`Section::Dashboard`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    active: Section,
    pub movers: LoadState<TopMovers>,
    pub companies: LoadState<CompanyDirectory>,
    pub analysis: LoadState<AnalysisView>,
    pub volatility: LoadState<VolatilityView>,
    pub comparison: LoadState<ComparisonView>,
    pub health: LoadState<HealthStatus>,
    pub fields: Fields,
    pub focused: Option<FieldId>,
    pub alert: Option<String>,
}

impl ViewState {
    pub fn new(default_days: u32) -> Self {
        Self {
            active: Section::Dashboard,
            movers: LoadState::NotLoaded,
            companies: LoadState::NotLoaded,
            analysis: LoadState::NotLoaded,
            volatility: LoadState::NotLoaded,
            comparison: LoadState::NotLoaded,
            health: LoadState::NotLoaded,
            fields: Fields::new(default_days),
            focused: None,
            alert: None,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// Navigation invalidates every view-bound load, so none of their
    /// spinners can be answered any more
    fn cancel_view_loads(&mut self) {
        self.movers.cancel();
        self.companies.cancel();
        self.analysis.cancel();
        self.volatility.cancel();
        self.comparison.cancel();
    }
}

// =============================================================================
// Loads
// =============================================================================

/// What to fetch. Tickers are already normalised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    TopMovers,
    Companies,
    StockDetail { ticker: String, days: u32 },
    Volatility { ticker: String, days: u32 },
    Comparison { ticker1: String, ticker2: String, days: u32 },
    Health,
}

impl LoadRequest {
    pub fn kind(&self) -> LoadKind {
        match self {
            LoadRequest::TopMovers => LoadKind::TopMovers,
            LoadRequest::Companies => LoadKind::Companies,
            LoadRequest::StockDetail { .. } => LoadKind::StockDetail,
            LoadRequest::Volatility { .. } => LoadKind::Volatility,
            LoadRequest::Comparison { .. } => LoadKind::Comparison,
            LoadRequest::Health => LoadKind::Health,
        }
    }
}

/// Who asked for a load; decides how a failure is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Background,
    UserAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingLoad {
    pub token: LoadToken,
    pub request: LoadRequest,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadResult {
    TopMovers(TopMovers),
    Companies(Vec<Company>),
    StockDetail {
        series: Vec<SeriesPoint>,
        summary: StockSummary,
    },
    Volatility(VolatilityMetrics),
    Comparison(ComparisonResult),
    Health(HealthStatus),
}

/// Run a load against a data source.
///
/// Joined pairs are fetched concurrently and fail together: if either call
/// errors, the whole load errors and neither half is returned.
pub async fn execute<M>(source: &M, request: &LoadRequest) -> Result<LoadResult, ApiError>
where
    M: MarketData + ?Sized,
{
    match request {
        LoadRequest::TopMovers => {
            let (gainers, losers) = tokio::try_join!(source.get_top_gainers(), source.get_top_losers())?;
            Ok(LoadResult::TopMovers(TopMovers::new(gainers, losers)))
        }
        LoadRequest::Companies => source.get_companies().await.map(LoadResult::Companies),
        LoadRequest::StockDetail { ticker, days } => {
            let (series, summary) = tokio::try_join!(
                source.get_stock_series(ticker, *days),
                source.get_summary(ticker)
            )?;
            Ok(LoadResult::StockDetail { series, summary })
        }
        LoadRequest::Volatility { ticker, days } => source
            .get_volatility(ticker, *days)
            .await
            .map(LoadResult::Volatility),
        LoadRequest::Comparison { ticker1, ticker2, days } => source
            .compare(ticker1, ticker2, *days)
            .await
            .map(LoadResult::Comparison),
        LoadRequest::Health => source.health_check().await.map(LoadResult::Health),
    }
}

/// How a finished load wants to be surfaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Blocking message for the user; also stored in `ViewState::alert`
    Alert(String),
    /// Failure that was only logged
    Logged(String),
}

// =============================================================================
// Controller
// =============================================================================

pub struct DashboardController {
    state: ViewState,
    tracker: LoadTracker,
    display: DisplaySettings,
}

impl DashboardController {
    pub fn new(display: DisplaySettings) -> Self {
        Self {
            state: ViewState::new(display.default_days),
            tracker: LoadTracker::new(),
            display,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// Make `section` the only active section and start its load, if it has one
    pub fn activate(&mut self, section: Section) -> Option<PendingLoad> {
        log::debug!("Activating section {:?}", section);
        self.state.active = section;
        self.state.focused = None;
        self.tracker.advance();
        self.state.cancel_view_loads();

        match section.activation_load()? {
            LoadKind::TopMovers => Some(self.load_dashboard()),
            LoadKind::Companies => Some(self.load_companies()),
            _ => None,
        }
    }

    pub fn load_dashboard(&mut self) -> PendingLoad {
        self.state.movers.begin();
        self.issue(LoadRequest::TopMovers, Origin::Background)
    }

    pub fn load_companies(&mut self) -> PendingLoad {
        self.state.companies.begin();
        self.issue(LoadRequest::Companies, Origin::Background)
    }

    /// Company card activation: jump to analysis for `ticker` over the default window
    pub fn load_stock_detail(&mut self, ticker: &str) -> PendingLoad {
        self.activate(Section::Analysis);
        let days = self.display.default_days;
        self.state.fields.analysis_ticker.set(ticker);
        self.state.fields.analysis_days.set(days.to_string());
        self.state.analysis.begin();
        self.issue(
            LoadRequest::StockDetail {
                ticker: ticker.to_string(),
                days,
            },
            Origin::Background,
        )
    }

    /// Validate the analysis inputs and start the detail load
    pub fn analyze(&mut self, ticker: &str, days: &str) -> Option<PendingLoad> {
        let (ticker, days) = match self.validate_analysis(ticker, days) {
            Ok(valid) => valid,
            Err(e) => {
                self.raise(e.to_string());
                return None;
            }
        };
        self.state.analysis.begin();
        Some(self.issue(LoadRequest::StockDetail { ticker, days }, Origin::UserAction))
    }

    /// [`Self::analyze`] with the current field values
    pub fn submit_analysis(&mut self) -> Option<PendingLoad> {
        let ticker = self.state.fields.analysis_ticker.value().to_string();
        let days = self.state.fields.analysis_days.value().to_string();
        self.analyze(&ticker, &days)
    }

    pub fn compare(&mut self, ticker1: &str, ticker2: &str, days: &str) -> Option<PendingLoad> {
        let request = match self.validate_comparison(ticker1, ticker2, days) {
            Ok(request) => request,
            Err(e) => {
                self.raise(e.to_string());
                return None;
            }
        };
        self.state.comparison.begin();
        Some(self.issue(request, Origin::UserAction))
    }

    /// [`Self::compare`] with the current field values
    pub fn submit_comparison(&mut self) -> Option<PendingLoad> {
        let fields = &self.state.fields;
        let ticker1 = fields.compare_ticker1.value().to_string();
        let ticker2 = fields.compare_ticker2.value().to_string();
        let days = fields.compare_days.value().to_string();
        self.compare(&ticker1, &ticker2, &days)
    }

    /// Volatility breakdown for the ticker currently shown in analysis
    pub fn load_volatility(&mut self) -> Option<PendingLoad> {
        let (ticker, days) = self
            .state
            .analysis
            .as_ref()
            .map(|view| (view.ticker.clone(), view.days))?;
        self.state.volatility.begin();
        Some(self.issue(LoadRequest::Volatility { ticker, days }, Origin::Background))
    }

    pub fn check_health(&mut self) -> PendingLoad {
        self.state.health.begin();
        self.issue(LoadRequest::Health, Origin::Background)
    }

    /// Apply a finished load. Stale results are dropped without touching state.
    pub fn finish(&mut self, load: &PendingLoad, result: Result<LoadResult, ApiError>) -> Option<Notice> {
        if !self.tracker.is_current(&load.token) {
            log::debug!("Dropping stale {:?} result", load.token.kind);
            return None;
        }

        match result {
            Ok(data) => {
                self.apply(&load.request, data);
                None
            }
            Err(e) => Some(self.report(load, e)),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.state.alert = None;
    }

    // -------------------------------------------------------------------------
    // Fields
    // -------------------------------------------------------------------------

    pub fn focus(&mut self, field: Option<FieldId>) {
        self.state.focused = field;
    }

    /// Type into the focused field
    pub fn insert_text(&mut self, text: &str) {
        if let Some(id) = self.state.focused {
            if self.state.fields.get_mut(id).insert(text) {
                self.field_changed(id);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(id) = self.state.focused {
            if self.state.fields.get_mut(id).backspace() {
                self.field_changed(id);
            }
        }
    }

    pub fn clear_field(&mut self, id: FieldId) {
        if self.state.fields.get_mut(id).clear() {
            self.field_changed(id);
        }
    }

    /// Enter in a field submits its section's action
    pub fn submit_focused(&mut self) -> Option<PendingLoad> {
        match self.state.focused? {
            FieldId::AnalysisTicker | FieldId::AnalysisDays => self.submit_analysis(),
            FieldId::CompareTicker1 | FieldId::CompareTicker2 | FieldId::CompareDays => {
                self.submit_comparison()
            }
            FieldId::CompanyFilter => None,
        }
    }

    fn field_changed(&mut self, id: FieldId) {
        if id == FieldId::CompanyFilter {
            let term = self.state.fields.company_filter.value().to_string();
            if let Some(directory) = self.state.companies.as_mut() {
                directory.apply_filter(&term);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn issue(&mut self, request: LoadRequest, origin: Origin) -> PendingLoad {
        let token = self.tracker.issue(request.kind());
        log::info!("Loading {:?}", request);
        PendingLoad {
            token,
            request,
            origin,
        }
    }

    fn raise(&mut self, message: String) {
        log::warn!("{}", message);
        self.state.alert = Some(message);
    }

    fn validate_analysis(&self, ticker: &str, days: &str) -> Result<(String, u32), ValidationError> {
        let ticker = normalize_ticker(ticker)?.ok_or(ValidationError::MissingTicker)?;
        let days = parse_days(days, self.display.default_days)?;
        Ok((ticker, days))
    }

    fn validate_comparison(&self, ticker1: &str, ticker2: &str, days: &str) -> Result<LoadRequest, ValidationError> {
        let (ticker1, ticker2) = match (normalize_ticker(ticker1)?, normalize_ticker(ticker2)?) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(ValidationError::MissingTickerPair),
        };
        let days = parse_days(days, self.display.default_days)?;
        Ok(LoadRequest::Comparison { ticker1, ticker2, days })
    }

    fn apply(&mut self, request: &LoadRequest, data: LoadResult) {
        match (request, data) {
            (_, LoadResult::TopMovers(movers)) => {
                log::info!(
                    "Loaded {} gainers, {} losers",
                    movers.gainers.len(),
                    movers.losers.len()
                );
                self.state.movers = LoadState::Loaded(movers);
            }
            (_, LoadResult::Companies(companies)) => {
                log::info!("Loaded {} companies", companies.len());
                let mut directory = CompanyDirectory::new(companies);
                directory.apply_filter(self.state.fields.company_filter.value());
                self.state.companies = LoadState::Loaded(directory);
            }
            (LoadRequest::StockDetail { ticker, days }, LoadResult::StockDetail { series, summary }) => {
                self.state.analysis = LoadState::Loaded(AnalysisView {
                    ticker: ticker.clone(),
                    days: *days,
                    price_chart: PriceChart::from_series(&series),
                    returns_chart: ReturnsChart::from_series(&series),
                    stats: render_stat_panel(&summary, &self.display),
                });
                if self.state.volatility.as_ref().is_some_and(|v| &v.ticker != ticker) {
                    self.state.volatility = LoadState::NotLoaded;
                }
            }
            (LoadRequest::Volatility { ticker, days }, LoadResult::Volatility(metrics)) => {
                self.state.volatility = LoadState::Loaded(VolatilityView {
                    ticker: ticker.clone(),
                    days: *days,
                    panel: render_volatility_panel(&metrics),
                });
            }
            (LoadRequest::Comparison { ticker1, ticker2, days }, LoadResult::Comparison(result)) => {
                self.state.comparison = LoadState::Loaded(ComparisonView {
                    ticker1: ticker1.clone(),
                    ticker2: ticker2.clone(),
                    days: *days,
                    cards: render_comparison(ticker1, ticker2, &result, &self.display),
                });
            }
            (_, LoadResult::Health(status)) => {
                if !status.is_healthy() {
                    log::warn!("Backend reports status {:?}", status.status);
                }
                self.state.health = LoadState::Loaded(status);
            }
            (request, _) => {
                log::error!("Result does not match request {:?}", request);
            }
        }
    }

    fn report(&mut self, load: &PendingLoad, error: ApiError) -> Notice {
        let message = error.to_string();
        match (&load.request, load.origin) {
            (LoadRequest::StockDetail { .. }, Origin::UserAction) => {
                self.state.analysis.fail(message.clone());
                let alert = format!("Error analyzing stock: {}", message);
                self.raise(alert.clone());
                Notice::Alert(alert)
            }
            (LoadRequest::Comparison { .. }, _) => {
                self.state.comparison.fail(message.clone());
                let alert = format!("Error comparing stocks: {}", message);
                self.raise(alert.clone());
                Notice::Alert(alert)
            }
            (request, _) => {
                log::error!("Failed to load {:?}: {}", request, message);
                match request.kind() {
                    LoadKind::TopMovers => self.state.movers.fail(message.clone()),
                    LoadKind::Companies => self.state.companies.fail(message.clone()),
                    LoadKind::StockDetail => self.state.analysis.fail(message.clone()),
                    LoadKind::Volatility => self.state.volatility.fail(message.clone()),
                    LoadKind::Comparison => self.state.comparison.fail(message.clone()),
                    LoadKind::Health => self.state.health = LoadState::Error(message.clone()),
                }
                Notice::Logged(message)
            }
        }
    }
}
