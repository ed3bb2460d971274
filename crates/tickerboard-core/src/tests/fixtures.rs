//! Shared test data, an in-memory market-data source and a tiny HTTP server

use crate::api::{ApiError, MarketData};
use crate::models::*;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// DATA
// ============================================================================

pub fn summary(ticker: &str, name: &str, return_percent: f64) -> StockSummary {
    StockSummary {
        ticker: ticker.to_string(),
        name: name.to_string(),
        return_percent,
        volatility: 1.84,
        current_price: 1520.5,
        high_52week: 1700.0,
        low_52week: 1300.25,
        moving_avg_7: 1510.0,
        daily_return: 0.5,
        ..Default::default()
    }
}

pub fn company(ticker: &str, name: &str, sector: &str) -> Company {
    Company {
        ticker: ticker.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
    }
}

pub fn companies() -> Vec<Company> {
    vec![
        company("INFY", "Infosys", "IT"),
        company("TCS", "Tata Consultancy Services", "IT"),
        company("HDFCBANK", "HDFC Bank", "Banking"),
        company("RELIANCE", "Reliance Industries", "Energy"),
    ]
}

pub fn point(day: u32, close: f64, ma: Option<f64>, ret: Option<f64>) -> SeriesPoint {
    SeriesPoint {
        date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        close_price: close,
        moving_avg_7: ma,
        daily_return: ret,
        ticker: None,
        open_price: None,
        high_price: None,
        low_price: None,
        volume: None,
    }
}

pub fn series(len: u32) -> Vec<SeriesPoint> {
    (1..=len)
        .map(|day| {
            let close = 100.0 + day as f64;
            let ma = (day >= 7).then(|| close - 3.0);
            let ret = (day > 1).then(|| if day % 2 == 0 { 1.0 } else { -0.5 });
            point(day, close, ma, ret)
        })
        .collect()
}

pub fn comparison() -> ComparisonResult {
    ComparisonResult {
        stock1: summary("INFY", "Infosys", 4.5),
        stock2: summary("TCS", "Tata Consultancy Services", -1.25),
        correlation: 0.123456,
        volatility_ratio: 1.5,
        return_difference: 5.75,
        period_days: Some(90),
    }
}

pub fn volatility(ticker: &str) -> VolatilityMetrics {
    VolatilityMetrics {
        ticker: ticker.to_string(),
        daily_volatility: 1.2345,
        annualized_volatility: 19.6,
        volatility_trend: "Increasing".to_string(),
        high_volatility_days: 3,
        volatility_mean: 0.12,
        volatility_std: 0.8,
    }
}

// ============================================================================
// FAKE SOURCE
// ============================================================================

/// In-memory [`MarketData`]; every call succeeds unless its endpoint is failed
pub struct FakeMarket {
    pub gainers: Vec<StockSummary>,
    pub losers: Vec<StockSummary>,
    pub companies: Vec<Company>,
    pub series: Vec<SeriesPoint>,
    failing: Mutex<HashMap<&'static str, ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeMarket {
    pub fn new() -> Self {
        Self {
            gainers: vec![summary("AAA", "Alpha", 5.2)],
            losers: vec![summary("ZZZ", "Zeta", -3.1)],
            companies: companies(),
            series: series(10),
            failing: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make one endpoint fail from now on
    pub fn fail(&self, endpoint: &'static str, error: ApiError) {
        self.failing.lock().unwrap().insert(endpoint, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &'static str, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.failing.lock().unwrap().get(endpoint) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MarketData for FakeMarket {
    async fn get_top_gainers(&self) -> Result<TopGainers, ApiError> {
        self.record("top-gainers", "top-gainers".to_string())?;
        Ok(TopGainers {
            gainers: self.gainers.clone(),
        })
    }

    async fn get_top_losers(&self) -> Result<TopLosers, ApiError> {
        self.record("top-losers", "top-losers".to_string())?;
        Ok(TopLosers {
            losers: self.losers.clone(),
        })
    }

    async fn get_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.record("companies", "companies".to_string())?;
        Ok(self.companies.clone())
    }

    async fn get_stock_series(&self, ticker: &str, days: u32) -> Result<Vec<SeriesPoint>, ApiError> {
        self.record("stock", format!("stock/{}?days={}", ticker, days))?;
        Ok(self.series.clone())
    }

    async fn get_summary(&self, ticker: &str) -> Result<StockSummary, ApiError> {
        self.record("summary", format!("summary/{}", ticker))?;
        Ok(summary(ticker, "Summary", 2.0))
    }

    async fn compare(&self, ticker1: &str, ticker2: &str, days: u32) -> Result<ComparisonResult, ApiError> {
        self.record("compare", format!("compare/{}/{}?days={}", ticker1, ticker2, days))?;
        Ok(comparison())
    }

    async fn get_volatility(&self, ticker: &str, days: u32) -> Result<VolatilityMetrics, ApiError> {
        self.record("volatility", format!("volatility/{}?days={}", ticker, days))?;
        Ok(volatility(ticker))
    }

    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.record("health", "health".to_string())?;
        Ok(HealthStatus {
            status: "healthy".to_string(),
            timestamp: "2024-03-01T10:00:00".to_string(),
            data_points: 1200,
        })
    }
}

// ============================================================================
// LOCAL HTTP SERVER
// ============================================================================

/// Canned response for one path (query string excluded)
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn json(path: &'static str, body: serde_json::Value) -> Self {
        Self {
            path,
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn raw(path: &'static str, status: u16, body: &str) -> Self {
        Self {
            path,
            status,
            body: body.to_string(),
        }
    }
}

/// Serve `routes` on an ephemeral port. Returns the API base URL and the
/// request targets seen so far.
pub async fn serve(routes: Vec<Route>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let routes = Arc::new(routes);

    let seen_by_server = seen.clone();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let routes = routes.clone();
            let seen = seen_by_server.clone();
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let request = String::from_utf8_lossy(&request);
                let target = request
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();
                seen.lock().unwrap().push(target.clone());

                let path = target.split('?').next().unwrap_or("");
                let (status, body) = routes
                    .iter()
                    .find(|r| r.path == path)
                    .map(|r| (r.status, r.body.clone()))
                    .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));

                let response = format!(
                    "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}/api", addr), seen)
}
