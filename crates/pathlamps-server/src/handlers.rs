//! HTTP endpoint handlers for the Path Lamps API.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Human-operable HTML form for building payloads |
//! | `POST` | `/simulate` | Run one simulation, return the report |

use axum::Json;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use tracing::debug;

use pathlamps_types::SimulationRequest;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /simulate -- run one simulation
// ---------------------------------------------------------------------------

/// Run the simulator over the posted payload and return the report.
///
/// Validation failures in the payload (shape mismatches, non-positive
/// speeds, out-of-range lamp indices) come back as
/// `400 {"error": "<message>"}`; a simulation in which individuals
/// fail their walks is still a `200` with `success: false`.
pub async fn run_simulation(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    debug!(
        path_length = request.path_length,
        individuals = request.individuals.len(),
        "simulation requested"
    );

    let report = pathlamps_core::simulate(&request, state.options)?;
    Ok(Json(report))
}

// ---------------------------------------------------------------------------
// GET / -- HTML form page
// ---------------------------------------------------------------------------

/// Serve the human-operable form for constructing and submitting
/// simulation payloads.
///
/// The page carries no simulation logic; it only posts the textarea
/// content to `/simulate` and pretty-prints the JSON that comes back.
pub async fn index() -> impl IntoResponse {
    Html(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Path Lamps Simulator</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        textarea {
            width: 100%;
            background: #161b22;
            color: #c9d1d9;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 0.75rem;
            font-family: inherit;
        }
        button {
            background: #238636;
            color: #ffffff;
            border: none;
            border-radius: 6px;
            padding: 0.5rem 1.25rem;
            margin: 0.75rem 0;
            font-family: inherit;
            cursor: pointer;
        }
        button:hover { background: #2ea043; }
        pre {
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 0.75rem;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <h1>Path Lamps Simulator</h1>
    <p class="subtitle">Blinking lamps, walking individuals, one deterministic verdict</p>

    <textarea id="payload" rows="18" spellcheck="false">
{
  "path_length": 5,
  "lamps": [
    {"bright": 1.0, "dark": 1.0},
    {"bright": 0.8, "dark": 1.2},
    {"bright": 1.5, "dark": 0.5},
    {"bright": 1.0, "dark": 1.0},
    {"bright": 0.7, "dark": 1.3}
  ],
  "lamp_assignment": [0, 1, 2, 3, 4],
  "individuals": [
    {"speed": 1.0, "start_delay": 0.0},
    {"speed": 0.8, "start_delay": 0.3}
  ]
}
</textarea>
    <br>
    <button onclick="runSim()">Run Simulation</button>
    <pre id="out"></pre>

    <script>
        async function runSim() {
            const out = document.getElementById("out");
            let payload;
            try {
                payload = JSON.parse(document.getElementById("payload").value);
            } catch (e) {
                out.innerText = "payload is not valid JSON: " + e;
                return;
            }
            const response = await fetch("/simulate", {
                method: "POST",
                headers: { "content-type": "application/json" },
                body: JSON.stringify(payload),
            });
            out.innerText = JSON.stringify(await response.json(), null, 2);
        }
    </script>
</body>
</html>"##,
    )
}
