use reward_consensus::{
    base_reward, block_reward, evaluate_reward, EmissionParams, ErrorCode, RewardDecision,
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    version: Option<u8>,

    #[serde(default)]
    median_weight: u64,

    #[serde(default)]
    block_weight: u64,

    #[serde(default)]
    already_generated: u64,

    #[serde(default)]
    emission_speed_factor: Option<u32>,

    #[serde(default)]
    final_subsidy_floor: Option<u64>,
}

#[derive(Serialize, Default, Debug, PartialEq)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    base_reward: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reward: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    accepted: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    emission_speed_factor: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    final_subsidy_floor: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    full_reward_zone: Option<u64>,
}

fn err_code(code: ErrorCode) -> String {
    code.as_str().to_string()
}

fn fail(err: String) -> Response {
    Response {
        ok: false,
        err: Some(err),
        ..Default::default()
    }
}

fn decision(d: RewardDecision) -> Response {
    // A rejected block is a valid answer, not a request error.
    Response {
        ok: true,
        reward: Some(d.reward),
        accepted: Some(d.accepted),
        ..Default::default()
    }
}

// Explicit emission constants win; otherwise a version selects them.
fn resolve_params(req: &Request) -> Result<EmissionParams, String> {
    match (req.emission_speed_factor, req.final_subsidy_floor, req.version) {
        (Some(esf), Some(floor), _) => Ok(EmissionParams::with_default_baseline(esf, floor)),
        (_, _, Some(v)) => EmissionParams::for_version(v).map_err(|e| err_code(e.code)),
        _ => Err("missing emission_speed_factor/final_subsidy_floor or version".to_string()),
    }
}

fn handle(req: Request) -> Response {
    log::debug!("op={}", req.op);
    match req.op.as_str() {
        "base_reward" => match resolve_params(&req) {
            Ok(p) => Response {
                ok: true,
                base_reward: Some(base_reward(
                    req.already_generated,
                    p.emission_speed_factor,
                    p.final_subsidy_floor,
                )),
                ..Default::default()
            },
            Err(e) => fail(e),
        },
        "block_reward" => {
            let (Some(esf), Some(floor)) = (req.emission_speed_factor, req.final_subsidy_floor)
            else {
                return fail("missing emission_speed_factor/final_subsidy_floor".to_string());
            };
            decision(evaluate_reward(
                req.median_weight,
                req.block_weight,
                req.already_generated,
                esf,
                floor,
            ))
        }
        "block_reward_versioned" => {
            let Some(v) = req.version else {
                return fail("missing version".to_string());
            };
            match EmissionParams::for_version(v) {
                Ok(p) => decision(block_reward(
                    &p,
                    req.median_weight,
                    req.block_weight,
                    req.already_generated,
                )),
                Err(e) => fail(err_code(e.code)),
            }
        }
        "emission_params" => {
            let Some(v) = req.version else {
                return fail("missing version".to_string());
            };
            match EmissionParams::for_version(v) {
                Ok(p) => Response {
                    ok: true,
                    emission_speed_factor: Some(p.emission_speed_factor),
                    final_subsidy_floor: Some(p.final_subsidy_floor),
                    full_reward_zone: Some(p.full_reward_zone),
                    ..Default::default()
                },
                Err(e) => fail(err_code(e.code)),
            }
        }
        _ => fail("unknown op".to_string()),
    }
}

fn main() {
    env_logger::init();

    let resp = match serde_json::from_reader::<_, Request>(std::io::stdin()) {
        Ok(req) => handle(req),
        Err(e) => fail(format!("bad request: {e}")),
    };
    if let Err(e) = serde_json::to_writer(std::io::stdout(), &resp) {
        log::error!("write response: {e}");
    }
}
