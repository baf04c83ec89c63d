use super::catalogue;

catalogue! {
    INTERNAL = ("F000", INTERNAL_SERVER_ERROR, "internal server error");
    DATABASE_ERROR = ("F001", INTERNAL_SERVER_ERROR, "database error");

    JSON_MISSING_FIELDS = ("F002", BAD_REQUEST, "missing or invalid fields");
    JSON_SYNTAX_ERROR = ("F003", BAD_REQUEST, "syntax error");
    JSON_CONTENT_TYPE = ("F004", BAD_REQUEST, "missing or wrong content-type");
    JSON_VALIDATE_INVALID = ("F005", BAD_REQUEST, "invalid data");
    INVALID_PATH = ("F006", BAD_REQUEST, "invalid path parameter");
    INVALID_QUERY = ("F007", BAD_REQUEST, "invalid query string");

    MISSING_TOKEN = ("F008", UNAUTHORIZED, "authorization header is missing");
    INVALID_TOKEN = ("F009", UNAUTHORIZED, "invalid or expired token");
    INVALID_CREDENTIALS = ("F010", UNAUTHORIZED, "invalid email or password");
    EMAIL_TAKEN = ("F011", CONFLICT, "email is already registered");
    USERNAME_TAKEN = ("F012", CONFLICT, "username is already taken");
    USER_NOT_FOUND = ("F013", NOT_FOUND, "user not found");

    TEAM_NOT_FOUND = ("F014", NOT_FOUND, "team not found");
    HOME_TEAM_NOT_FOUND = ("F015", NOT_FOUND, "home team not found");
    AWAY_TEAM_NOT_FOUND = ("F016", NOT_FOUND, "away team not found");
    PLAYER_NOT_FOUND = ("F017", NOT_FOUND, "player not found");
    MATCH_NOT_FOUND = ("F018", NOT_FOUND, "match not found");
    RESULT_NOT_FOUND = ("F019", NOT_FOUND, "no result found for this match");

    JERSEY_NUMBER_TAKEN = ("F020", CONFLICT, "jersey number is already taken in this team");
    SAME_TEAMS = ("F021", BAD_REQUEST, "home team and away team cannot be the same");
    MATCH_ALREADY_COMPLETED = ("F022", BAD_REQUEST, "cannot edit a completed match");
    PLAYER_NOT_IN_MATCH = ("F023", BAD_REQUEST, "player does not belong to either team in this match");
    SCORE_MISMATCH = ("F024", BAD_REQUEST, "number of goals does not match the provided scores");
    MATCH_NOT_COMPLETED = ("F025", BAD_REQUEST, "match has not been completed yet");

    TOKEN_GENERATION = ("F026", INTERNAL_SERVER_ERROR, "failed to generate token");
    PASSWORD_HASH = ("F027", INTERNAL_SERVER_ERROR, "failed to hash password");

    JSON_BODY_INVALID = ("F028", BAD_REQUEST, "failed to read request body");
}
