//! Java source and configuration templates for the Spring Boot backend.
//!
//! All entity-level templates share the same substitution keys
//! (`className`, `tableName`, `packageName`, `idType`), so one map rendered
//! against the whole set keeps the id type identical across the vertical
//! slice.

pub const MAIN_CLASS: &str = r#"package {{packageName}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {{applicationClass}} {

    public static void main(String[] args) {
        SpringApplication.run({{applicationClass}}.class, args);
    }
}
"#;

pub const PROPERTIES_POSTGRES: &str = r#"server.port={{backendPort}}

spring.datasource.url=jdbc:postgresql://{{dbHost}}:{{dbPort}}/{{dbName}}
spring.datasource.username={{dbUser}}
spring.datasource.password={{dbPassword}}
spring.jpa.hibernate.ddl-auto=update
spring.jpa.show-sql=false
"#;

pub const PROPERTIES_MONGO: &str = r#"server.port={{backendPort}}

spring.data.mongodb.uri={{dbUri}}
"#;

pub const PROPERTIES_PLAIN: &str = r#"server.port={{backendPort}}
"#;

pub const MODEL_POSTGRES: &str = r#"package {{packageName}}.model;

import jakarta.persistence.Entity;
import jakarta.persistence.GeneratedValue;
import jakarta.persistence.GenerationType;
import jakarta.persistence.Id;
import jakarta.persistence.Table;

@Entity
@Table(name = "{{tableName}}")
public class {{className}} {

    @Id
    @GeneratedValue(strategy = GenerationType.IDENTITY)
    private {{idType}} id;

    private String name;

    private String email;

    public {{idType}} getId() {
        return id;
    }

    public void setId({{idType}} id) {
        this.id = id;
    }

    public String getName() {
        return name;
    }

    public void setName(String name) {
        this.name = name;
    }

    public String getEmail() {
        return email;
    }

    public void setEmail(String email) {
        this.email = email;
    }
}
"#;

pub const MODEL_MONGO: &str = r#"package {{packageName}}.model;

import org.springframework.data.annotation.Id;
import org.springframework.data.mongodb.core.mapping.Document;

@Document(collection = "{{tableName}}")
public class {{className}} {

    @Id
    private {{idType}} id;

    private String name;

    private String email;

    public {{idType}} getId() {
        return id;
    }

    public void setId({{idType}} id) {
        this.id = id;
    }

    public String getName() {
        return name;
    }

    public void setName(String name) {
        this.name = name;
    }

    public String getEmail() {
        return email;
    }

    public void setEmail(String email) {
        this.email = email;
    }
}
"#;

pub const REPOSITORY_POSTGRES: &str = r#"package {{packageName}}.repository;

import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;

import {{packageName}}.model.{{className}};

@Repository
public interface {{className}}Repository extends JpaRepository<{{className}}, {{idType}}> {
}
"#;

pub const REPOSITORY_MONGO: &str = r#"package {{packageName}}.repository;

import org.springframework.data.mongodb.repository.MongoRepository;
import org.springframework.stereotype.Repository;

import {{packageName}}.model.{{className}};

@Repository
public interface {{className}}Repository extends MongoRepository<{{className}}, {{idType}}> {
}
"#;

pub const SERVICE: &str = r#"package {{packageName}}.service;

import java.util.List;
import java.util.Optional;

import org.springframework.stereotype.Service;

import {{packageName}}.model.{{className}};
import {{packageName}}.repository.{{className}}Repository;

@Service
public class {{className}}Service {

    private final {{className}}Repository repository;

    public {{className}}Service({{className}}Repository repository) {
        this.repository = repository;
    }

    public List<{{className}}> findAll() {
        return repository.findAll();
    }

    public Optional<{{className}}> findById({{idType}} id) {
        return repository.findById(id);
    }

    public {{className}} save({{className}} entity) {
        return repository.save(entity);
    }

    public void deleteById({{idType}} id) {
        repository.deleteById(id);
    }
}
"#;

pub const CONTROLLER: &str = r#"package {{packageName}}.controller;

import java.util.List;

import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.DeleteMapping;
import org.springframework.web.bind.annotation.GetMapping;
import org.springframework.web.bind.annotation.PathVariable;
import org.springframework.web.bind.annotation.PostMapping;
import org.springframework.web.bind.annotation.RequestBody;
import org.springframework.web.bind.annotation.RequestMapping;
import org.springframework.web.bind.annotation.RestController;

import {{packageName}}.model.{{className}};
import {{packageName}}.service.{{className}}Service;

@RestController
@RequestMapping("/api/{{tableName}}")
public class {{className}}Controller {

    private final {{className}}Service service;

    public {{className}}Controller({{className}}Service service) {
        this.service = service;
    }

    @GetMapping
    public List<{{className}}> findAll() {
        return service.findAll();
    }

    @GetMapping("/{id}")
    public ResponseEntity<{{className}}> findById(@PathVariable {{idType}} id) {
        return service.findById(id)
                .map(ResponseEntity::ok)
                .orElse(ResponseEntity.notFound().build());
    }

    @PostMapping
    public {{className}} create(@RequestBody {{className}} entity) {
        return service.save(entity);
    }

    @DeleteMapping("/{id}")
    public ResponseEntity<Void> deleteById(@PathVariable {{idType}} id) {
        service.deleteById(id);
        return ResponseEntity.noContent().build();
    }
}
"#;

pub const GITIGNORE: &str = "target/\n.mvn/\n*.class\n*.log\n.idea/\n";
