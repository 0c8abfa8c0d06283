use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::api::{Command, DataReply, ErrorReply, Preset, StatusReply};
use crate::curtain::CurtainRef;
use crate::Error;

// Step counts this large would overflow the percentage math in the actor;
// anything beyond it cannot be a real motor request anyway.
const MAX_STEPS: i64 = i64::MAX / 100;

/// The `/gpio` HTTP surface, CORS-enabled for any origin. Handlers answer
/// only after the curtain actor has finished the requested motion.
pub fn routes(
    curtain: CurtainRef,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let curtain = warp::any().map(move || curtain.clone());
    let accept = warp::get().or(warp::post()).unify();

    let set_current = warp::path!("gpio" / "set" / "current" / String)
        .and(accept.clone())
        .and(curtain.clone())
        .and_then(set_current);

    let set_steps = warp::path!("gpio" / "set" / "steps" / String)
        .and(accept.clone())
        .and(curtain.clone())
        .and_then(set_steps);

    let get_current = warp::path!("gpio" / "get" / "current")
        .and(warp::get())
        .and(curtain.clone())
        .and_then(get_current);

    let move_steps = warp::path!("gpio" / "move" / String)
        .and(accept.clone())
        .and(curtain.clone())
        .and_then(move_steps);

    let move_to = warp::path!("gpio" / String)
        .and(accept)
        .and(curtain)
        .and_then(move_to);

    set_current
        .or(set_steps)
        .or(get_current)
        .or(move_steps)
        .or(move_to)
        .recover(handle_rejection)
        .with(warp::cors().allow_any_origin().allow_methods(vec!["GET", "POST"]))
}

async fn move_to(percent: String, curtain: CurtainRef) -> Result<impl Reply, Rejection> {
    let percent = parse_int(&percent)?;
    let (done, ack) = oneshot::channel();

    send(&curtain, Command::MoveTo { percent, done }).await?;
    ack.await.map_err(|_| gone())?;

    Ok(warp::reply::json(&StatusReply::ok()))
}

async fn move_steps(steps: String, curtain: CurtainRef) -> Result<impl Reply, Rejection> {
    let steps = parse_int(&steps)?;
    if steps.unsigned_abs() > MAX_STEPS as u64 {
        return Err(warp::reject::custom(ApiError(Error::InvalidInput(
            format!("step count out of range: {}", steps),
        ))));
    }
    let (done, ack) = oneshot::channel();

    send(&curtain, Command::MoveSteps { steps, done }).await?;
    ack.await.map_err(|_| gone())?;

    Ok(warp::reply::json(&StatusReply::ok()))
}

async fn set_current(preset: String, curtain: CurtainRef) -> Result<impl Reply, Rejection> {
    let preset: Preset = preset
        .parse()
        .map_err(|e| warp::reject::custom(ApiError(Error::InvalidInput(e))))?;
    let (done, ack) = oneshot::channel();

    send(&curtain, Command::SetCurrent { preset, done }).await?;
    ack.await.map_err(|_| gone())?;

    Ok(warp::reply::json(&StatusReply::ok()))
}

async fn set_steps(steps: String, curtain: CurtainRef) -> Result<impl Reply, Rejection> {
    let steps = parse_int(&steps)?;
    if !(1..=MAX_STEPS).contains(&steps) {
        return Err(warp::reject::custom(ApiError(Error::ConfigurationError(
            format!("full revolution steps out of range: {}", steps),
        ))));
    }
    let (done, ack) = oneshot::channel();

    send(&curtain, Command::SetSteps { steps, done }).await?;
    ack.await.map_err(|_| gone())?;

    Ok(warp::reply::json(&StatusReply::ok()))
}

async fn get_current(curtain: CurtainRef) -> Result<impl Reply, Rejection> {
    let (reply, rx) = oneshot::channel();

    send(&curtain, Command::GetCurrent { reply }).await?;
    let current = rx.await.map_err(|_| gone())?;

    Ok(warp::reply::json(&DataReply {
        data: current.to_string(),
        status: 200,
    }))
}

fn parse_int(s: &str) -> Result<i64, Rejection> {
    s.parse()
        .map_err(|_| warp::reject::custom(ApiError(Error::InvalidInput(s.to_string()))))
}

async fn send(curtain: &CurtainRef, cmd: Command) -> Result<(), Rejection> {
    curtain.sender.send(cmd).await.map_err(|_| gone())
}

fn gone() -> Rejection {
    warp::reject::custom(ApiError(Error::ControllerGone))
}

#[derive(Debug)]
struct ApiError(Error);

impl warp::reject::Reject for ApiError {}

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(ApiError(e)) = err.find() {
        let status = match e {
            Error::InvalidInput(_) | Error::ConfigurationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = warp::reply::json(&ErrorReply {
            message: e.to_string(),
            status: status.as_u16(),
        });
        return Ok(warp::reply::with_status(body, status));
    }

    Err(err)
}
