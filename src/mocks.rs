//! Canned workflow-list API responses for shell and UI tests.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::workflow::WorkflowStatus;

/// Route pattern for the workflow-list endpoint. Unanchored, so any URL
/// containing it matches.
pub const WORKFLOWS_API: &str = r"/api/v1/namespaces/[^/]+/workflows";

pub const MOCK_WORKFLOW_TYPE: &str = "ImportantWorkflowType";
pub const MOCK_TASK_QUEUE: &str = "rainbow-statuses";
const MOCK_TIMESTAMP: &str = "2022-03-23T18:06:01.726484047Z";

// Search attribute payloads as the server returns them: base64 metadata and data.
const SEARCH_ATTRIBUTES: [(&str, &str, &str); 7] = [
    ("BinaryChecksums", "S2V5d29yZA==", "WyIzMmUwNDI1OWUzYTFlMTM3ZmE2Njg5M2JiNjE3OTc5YSJd"),
    ("CustomBoolField", "Qm9vbA==", "dHJ1ZQ=="),
    ("CustomDatetimeField", "RGF0ZXRpbWU=", "IjIwMjItMDMtMjNUMTg6MDY6MDEuNzIwMTM3WiI="),
    ("CustomDoubleField", "RG91Ymxl", "MA=="),
    ("CustomIntField", "SW50", "MA=="),
    ("CustomKeywordField", "S2V5d29yZA==", "InJhaW5ib3ctc3RhdHVzZXMtMDAyYzk4Ig=="),
    ("CustomStringField", "VGV4dA==", "InJhaW5ib3cgc3RhdHVzZXMgMDAyYzk4IFJ1bm5pbmci"),
];
const JSON_PLAIN_ENCODING: &str = "anNvbi9wbGFpbg==";

static WORKFLOWS_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORKFLOWS_API).expect("WORKFLOWS_API is a valid pattern"));

/// One running workflow execution with a fresh run id.
pub fn mock_workflow() -> Value {
    let run_id = Uuid::new_v4().to_string();
    let status = WorkflowStatus::Running.as_str();

    let indexed_fields: serde_json::Map<String, Value> = SEARCH_ATTRIBUTES
        .iter()
        .map(|(name, kind, data)| {
            let field = json!({
                "metadata": { "encoding": JSON_PLAIN_ENCODING, "type": kind },
                "data": data,
            });
            ((*name).to_string(), field)
        })
        .collect();

    json!({
        "execution": {
            "workflowId": format!("{}_{status}", &run_id[..6]),
            "runId": run_id,
        },
        "type": { "name": MOCK_WORKFLOW_TYPE },
        "startTime": MOCK_TIMESTAMP,
        "closeTime": null,
        "status": status,
        "historyLength": "0",
        "parentNamespaceId": "",
        "parentExecution": null,
        "executionTime": MOCK_TIMESTAMP,
        "memo": { "fields": {} },
        "searchAttributes": { "indexedFields": indexed_fields },
        "autoResetPoints": null,
        "taskQueue": MOCK_TASK_QUEUE,
        "stateTransitionCount": "0",
    })
}

/// Serves one fixed page of mock executions for matching routes.
///
/// The page is generated once, so repeated requests see the same run ids.
pub struct MockWorkflowsApi {
    route: Regex,
    page: Value,
}

impl MockWorkflowsApi {
    pub const DEFAULT_PAGE_SIZE: usize = 3;

    pub fn new(count: usize) -> Self {
        let executions: Vec<Value> = (0..count).map(|_| mock_workflow()).collect();
        Self {
            route: WORKFLOWS_ROUTE.clone(),
            page: json!({
                "executions": executions,
                "nextPageToken": null,
            }),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.route.is_match(path)
    }

    pub fn respond(&self, path: &str) -> Option<Value> {
        self.matches(path).then(|| self.page.clone())
    }

    pub fn page(&self) -> &Value {
        &self.page
    }
}

impl Default for MockWorkflowsApi {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}
