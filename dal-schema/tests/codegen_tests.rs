//! Tests for Go DAL code generation

use dal_schema::codegen::{CodeGenerator, GeneratorOptions, GoDalGenerator};
use dal_schema::generate_from_sql;

const ORDERS_SQL: &str = "CREATE TABLE shop.`orders` (`order_id` bigint COMMENT 'Order ID', `amount` decimal(10,2) COMMENT 'Total amount', `created_at` datetime COMMENT 'Creation time')";

fn struct_body(code: &str, struct_name: &str) -> String {
    let start = format!("type {} struct {{\n", struct_name);
    let from = code.find(&start).expect("struct definition present") + start.len();
    let len = code[from..].find("\n}").expect("struct closes");
    code[from..from + len].to_string()
}

#[test]
fn test_orders_struct() {
    let code = generate_from_sql(ORDERS_SQL).unwrap();
    let body = struct_body(&code, "Orders");

    let fields: Vec<&str> = body.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(
        fields,
        vec![
            "\tOrderId int64 `orm:\"column(order_id)\" description:\"Order ID\" json:\"order_id\"`",
            "\tAmount string `orm:\"column(amount)\" description:\"Total amount\" json:\"amount\"`",
            "\tCreatedAt time.Time `orm:\"column(created_at)\" description:\"Creation time\" json:\"created_at\"`",
        ]
    );
}

#[test]
fn test_orders_registration() {
    let code = generate_from_sql(ORDERS_SQL).unwrap();

    assert!(code.contains("type OrdersService struct {\n\ttableInfo *TableInfo\n}"));
    assert!(code.contains("var T_OrdersService *OrdersService = &OrdersService{"));
    assert!(code.contains("\t\tTableName: \"orders\",\n"));
    assert!(code.contains("\t\tTpy:       reflect.TypeOf(Orders{}),\n"));
    assert!(code.contains("func init() {\n\t_TableMap[\"orders\"] = T_OrdersService.tableInfo\n}"));
}

#[test]
fn test_orders_methods() {
    let code = generate_from_sql(ORDERS_SQL).unwrap();

    for method in ["Query", "QueryPage", "QueryAll", "Update", "Insert", "Delete"] {
        let signature = format!(
            "func (s *OrdersService) {}(ctx context.Context, sessionId",
            method
        );
        assert_eq!(code.matches(&signature).count(), 1, "method {}", method);
        assert!(code.contains(&format!("s.tableInfo.DBWrap.{}(", method)));
    }

    assert!(code.contains(") (*Orders, int, error) {"));
    assert!(code.contains(") (int, []Orders, int, error) {"));
    assert!(code.contains("return info.(*Orders), errcode, err"));
    assert!(code.contains("return total, info.([]Orders), errcode, err"));
    assert!(code.contains("logx.WithContext(ctx).Debug(fmt.Sprintf(\"[%v] Delete[%v] errcode[%v] err[%v]\", sessionId, key, errcode, err))"));
}

#[test]
fn test_header_and_imports() {
    let code = generate_from_sql(ORDERS_SQL).unwrap();

    assert!(code.starts_with(
        "package table\n\nimport (\n\t\"context\"\n\t\"fmt\"\n\t\"reflect\"\n\t\"time\"\n\n\t\"github.com/zeromicro/go-zero/core/logx\"\n)\n\ntype Orders struct {\n"
    ));
}

#[test]
fn test_generation_is_idempotent() {
    let first = generate_from_sql(ORDERS_SQL).unwrap();
    let second = generate_from_sql(ORDERS_SQL).unwrap();
    assert_eq!(first, second);

    let generator = GoDalGenerator::new().unwrap();
    assert_eq!(generator.generate_from_sql(ORDERS_SQL).unwrap(), first);
}

#[test]
fn test_empty_sql_renders_unknown_table() {
    let code = generate_from_sql("").unwrap();

    assert!(code.contains("type UnknownTable struct {\n\n}"));
    assert!(code.contains("TableName: \"UnknownTable\""));
    assert!(code.contains("_TableMap[\"UnknownTable\"]"));
    assert!(code.contains("func (s *UnknownTableService) Delete("));
}

#[test]
fn test_snake_case_table_name() {
    let code = generate_from_sql(
        "CREATE TABLE crm.`user_login_log` (`is_ok` tinyint(1) COMMENT 'Success')",
    )
    .unwrap();

    assert!(code.contains("type UserLoginLog struct {"));
    assert!(code.contains("T_UserLoginLogService"));
    assert!(code.contains("_TableMap[\"user_login_log\"]"));
    assert!(code.contains("\tIsOk uint32 `orm:\"column(is_ok)\""));
}

#[test]
fn test_comment_text_is_verbatim() {
    let code = generate_from_sql(
        "CREATE TABLE s.`t` (`name` varchar(32) COMMENT 'Name <a&b> \"quoted\"')",
    )
    .unwrap();

    assert!(code.contains("description:\"Name <a&b> \"quoted\"\""));
}

#[test]
fn test_custom_package() {
    let generator = GoDalGenerator::with_options(GeneratorOptions {
        package: "model".to_string(),
    })
    .unwrap();

    let code = generator.generate_from_sql(ORDERS_SQL).unwrap();
    assert!(code.starts_with("package model\n"));
    assert!(code.contains("type Orders struct {"));
}
