use super::section::{ChartSection, Section, SectionError};
use super::state::DashboardState;
use crate::client::ApiClient;
use crate::config::{ChartSource, Config};
use crate::{Error, Result};
use futures::future::join_all;
use gradboard_engine::{
    AnnouncementList, ChartOption, ColumnSchema, TablePage, build_announcement_list, build_chart,
    school_columns,
};
use tracing::{debug, info, warn};

pub const SCHOOLS_FAILURE: &str = "加载院校数据失败";
pub const ANNOUNCEMENTS_FAILURE: &str = "加载公告失败";

/// Every section after one full load
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// First page of the freshly loaded school table
    pub schools: Section<TablePage>,
    pub announcements: Section<AnnouncementList>,
    pub charts: Vec<ChartSection>,
}

impl DashboardSnapshot {
    pub fn failures(&self) -> Vec<&SectionError> {
        let mut failures: Vec<&SectionError> = Vec::new();
        failures.extend(self.schools.error());
        failures.extend(self.announcements.error());
        failures.extend(self.charts.iter().filter_map(|chart| chart.outcome.error()));
        failures
    }
}

/// Owns the HTTP client, the configuration and the school page state
pub struct Dashboard {
    client: ApiClient,
    config: Config,
    schema: ColumnSchema,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config.server)?;
        let state = DashboardState::new(config.page_size());
        Ok(Self {
            client,
            config,
            schema: school_columns(),
            state,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Fetch every enabled section concurrently. Each section settles on its
    /// own; one failure never blocks the others.
    pub async fn load(&mut self) -> DashboardSnapshot {
        let client = &self.client;
        let sections = &self.config.dashboard;

        let schools = async {
            if sections.schools {
                Some(client.schools().await)
            } else {
                None
            }
        };
        let announcements = async {
            if sections.announcements {
                Some(client.announcements().await)
            } else {
                None
            }
        };
        let charts = join_all(self.config.charts.iter().map(|source| async move {
            let outcome = if source.enabled {
                Some(fetch_chart(client, source).await)
            } else {
                None
            };
            (source, outcome)
        }));

        let (schools, announcements, charts) = futures::join!(schools, announcements, charts);

        let schools = match settle("schools", SCHOOLS_FAILURE, schools) {
            Section::Ready(records) => {
                self.state.replace_schools(records);
                Section::Ready(self.state.render_current(&self.schema, None))
            }
            Section::Failed(err) => Section::Failed(err),
            Section::Skipped => Section::Skipped,
        };

        let date_format = &self.config.dashboard.date_format;
        let announcements = match settle("announcements", ANNOUNCEMENTS_FAILURE, announcements) {
            Section::Ready(items) => Section::Ready(build_announcement_list(&items, date_format)),
            Section::Failed(err) => Section::Failed(err),
            Section::Skipped => Section::Skipped,
        };

        let charts = charts
            .into_iter()
            .map(|(source, outcome)| ChartSection {
                outcome: settle(&source.id, &source.failure_label(), outcome),
                source: source.clone(),
            })
            .collect();

        DashboardSnapshot {
            schools,
            announcements,
            charts,
        }
    }

    /// Re-fetch the school collection. On success the page resets to 1;
    /// on failure the previous collection is kept.
    pub async fn load_schools(&mut self) -> Result<TablePage> {
        let records = self.client.schools().await?;
        info!(count = records.len(), "schools loaded");
        self.state.replace_schools(records);
        Ok(self.state.render_current(&self.schema, None))
    }

    pub async fn fetch_announcements(&self) -> Result<AnnouncementList> {
        let items = self.client.announcements().await?;
        Ok(build_announcement_list(
            &items,
            &self.config.dashboard.date_format,
        ))
    }

    pub async fn fetch_chart(&self, id: &str) -> Result<ChartOption> {
        let source = self
            .config
            .chart(id)
            .ok_or_else(|| Error::UnknownChart(id.to_string()))?;
        fetch_chart(&self.client, source).await
    }

    /// Render the current page with optional live column widths
    pub fn current_page(&self, widths: Option<&[u32]>) -> TablePage {
        self.state.render_current(&self.schema, widths)
    }

    /// Navigate to `page`; `None` when it does not exist
    pub fn show_page(&mut self, page: usize) -> Option<TablePage> {
        if page != self.state.current_page() && !self.state.go_to(page) {
            return None;
        }
        Some(self.current_page(None))
    }
}

async fn fetch_chart(client: &ApiClient, source: &ChartSource) -> Result<ChartOption> {
    let payload = client.chart_payload(source).await?;
    Ok(build_chart(&payload, &source.title, source.kind)?)
}

fn settle<T>(section: &str, label: &str, outcome: Option<Result<T>>) -> Section<T> {
    match outcome {
        None => {
            debug!(section, "section disabled");
            Section::Skipped
        }
        Some(Ok(value)) => {
            info!(section, "section loaded");
            Section::Ready(value)
        }
        Some(Err(err)) => {
            warn!(section, error = %err, "section failed");
            Section::Failed(SectionError::new(label, &err))
        }
    }
}
